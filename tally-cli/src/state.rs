use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `$TALLY_HOME`, or `~/.tally`
pub fn tally_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("TALLY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

pub fn ensure_tally_home() -> Result<PathBuf> {
    let dir = tally_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// File name of a user's transaction store
pub fn store_file_name(user_id: &str) -> Result<String> {
    let valid = !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        bail!("invalid user id {user_id:?} (use letters, digits, '-' or '_')");
    }
    Ok(format!("transactions_user_{user_id}.json"))
}

pub fn store_path_in(dir: &Path, user_id: &str) -> Result<PathBuf> {
    Ok(dir.join(store_file_name(user_id)?))
}

pub fn store_path(user_id: &str) -> Result<PathBuf> {
    store_path_in(&tally_home()?, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_file_name() {
        assert_eq!(store_file_name("u-42").unwrap(), "transactions_user_u-42.json");
        assert!(store_file_name("../etc").is_err());
        assert!(store_file_name("").is_err());
    }

    #[test]
    fn test_store_path_in() {
        let p = store_path_in(Path::new("/tmp/t"), "alice").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/t/transactions_user_alice.json"));
    }
}
