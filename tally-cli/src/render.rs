//! Plain-text rendering of engine output.

use rust_decimal::{Decimal, RoundingStrategy};
use tally_finance::{CategorySummary, HighlightKind, HighlightSummary, TransactionRow};
use tally_ingest::DataQualityReport;

use crate::config::DisplaySection;

/// Format a money amount as `R$ 1.234,56` (symbol and separators from config)
pub fn format_money(amount: Decimal, display: &DisplaySection) -> String {
    let mut cents = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    let text = cents.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(display.thousands_separator);
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !cents.is_zero() { "-" } else { "" };
    format!(
        "{sign}{} {grouped}{}{frac_part}",
        display.currency_symbol, display.decimal_separator
    )
}

pub fn render_highlights(h: &HighlightSummary, display: &DisplaySection) -> String {
    let mut out = String::new();
    for (title, kind) in [
        ("Entries", HighlightKind::Entries),
        ("Expenses", HighlightKind::Expenses),
        ("Total", HighlightKind::Balance),
    ] {
        let card = h.get(kind);
        out.push_str(&format!(
            "{title:<9} {:>16}   {}\n",
            format_money(card.total, display),
            card.caption(kind)
        ));
    }
    out
}

pub fn render_summary(s: &CategorySummary, display: &DisplaySection) -> String {
    let mut out = format!("{}\n", s.month.label());
    if s.is_empty() {
        out.push_str("No expenses recorded this month\n");
        return out;
    }
    for e in &s.entries {
        out.push_str(&format!(
            "  {:<14} {:>16} {:>5}%  {}\n",
            e.name,
            format_money(e.total, display),
            e.percent.to_string(),
            e.color
        ));
    }
    if !s.unattributed_total.is_zero() {
        out.push_str(&format!(
            "  {:<14} {:>16}\n",
            "(uncategorized)",
            format_money(s.unattributed_total, display)
        ));
    }
    out
}

pub fn render_rows(rows: &[TransactionRow], display: &DisplaySection) -> String {
    if rows.is_empty() {
        return "No transactions yet\n".to_string();
    }
    rows.iter()
        .map(|r| {
            format!(
                "{}  {:<24} {:>16}  {}\n",
                r.date.format("%d/%m/%y"),
                r.title,
                format_money(r.signed_amount, display),
                r.category
            )
        })
        .collect()
}

pub fn render_quality_notice(report: &DataQualityReport) -> Option<String> {
    if report.is_clean() {
        return None;
    }
    let mut out = String::from("note: some records use categories outside the catalog and are left out of the category breakdown:\n");
    for u in &report.unknown_categories {
        out.push_str(&format!("  - {} ({})\n", u.record_id, u.category_key));
    }
    Some(out)
}
