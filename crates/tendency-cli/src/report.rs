//! Console agreement report.

use std::fmt::Write;

use tendency_core::{AgreementReport, AgreementStat};

pub const REPORT_HEADER: &str = "--- Agreement Report (fuzzy system vs questionnaire) ---";

/// `Dimension <name>: <pct>% agreement (out of <n> students)`.
pub fn dimension_line(stat: &AgreementStat) -> String {
    format!(
        "Dimension {}: {:.2}% agreement (out of {} students)",
        stat.dimension,
        stat.percentage(),
        stat.total
    )
}

/// Pooled agreement over every compared row.
pub fn overall_line(report: &AgreementReport) -> String {
    let matches: usize = report.stats.iter().map(|s| s.matches).sum();
    format!(
        "Overall: {:.2}% agreement ({} of {} comparisons)",
        report.overall_percentage(),
        matches,
        report.total_rows()
    )
}

/// Header, one line per dimension, then the overall line.
pub fn render_report(report: &AgreementReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_HEADER}");
    for stat in &report.stats {
        let _ = writeln!(out, "{}", dimension_line(stat));
    }
    let _ = writeln!(out, "{}", overall_line(report));
    out
}
