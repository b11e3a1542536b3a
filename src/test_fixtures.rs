//! Shared test fixtures for evaluator, report, and output tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::evaluator::Generator;
use crate::input::{RawNode, RawResult, RawViolation};
use crate::report::{Impact, ProductInfo, Report};

/// Fixed clock: 2026-10-16 09:30:00 UTC.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

pub fn raw_violation(rule_id: &str, impact: &str, snippets: &[&str]) -> RawViolation {
    RawViolation {
        id: rule_id.to_string(),
        help: format!("{rule_id} help"),
        help_url: format!("https://dequeuniversity.com/rules/axe/4.8/{rule_id}"),
        impact: Impact::from(impact),
        nodes: snippets
            .iter()
            .map(|html| RawNode {
                html: (*html).to_string(),
            })
            .collect(),
    }
}

pub fn raw_result(url: &str, violations: Vec<RawViolation>) -> RawResult {
    RawResult {
        url: url.to_string(),
        violations,
        passes: Vec::new(),
    }
}

/// Generator for product "Acme" with fixed evaluation date.
pub fn generator() -> Generator {
    Generator::new(ProductInfo::new("Acme")).with_date(fixed_time())
}

/// Report with a single critical `image-alt` violation on `<img src=x>`.
pub fn image_alt_report() -> Report {
    let results = vec![raw_result(
        "https://example.com/",
        vec![raw_violation("image-alt", "critical", &["<img src=x>"])],
    )];
    generator().generate_at(&results, fixed_time())
}

/// Report with no input results at all.
pub fn empty_report() -> Report {
    generator().generate_at(&[], fixed_time())
}
