use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const CRATES: [&str; 4] = ["tally", "tally_core", "tally_finance", "tally_ingest"];

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    CRATES
        .iter()
        .map(|c| format!("{c}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber; `RUST_LOG` wins over the defaults.
/// Logs go to stderr so rendered output on stdout stays clean.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(false),
            "tally=info,tally_core=info,tally_finance=info,tally_ingest=info"
        );
        assert!(default_directives(true).contains("tally_finance=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
