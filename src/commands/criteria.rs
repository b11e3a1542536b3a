use std::fmt::Write;

use crate::catalog::{Criterion, criteria_by_level, wcag22_criteria};
use crate::cli::{CriteriaArgs, ListFormat};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::write_output;

#[must_use]
pub fn run_criteria(args: &CriteriaArgs) -> i32 {
    match run_criteria_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Print the catalog, filtered by level and automation.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn run_criteria_impl(args: &CriteriaArgs) -> Result<()> {
    let criteria = select_criteria(args);
    let output = match args.format {
        ListFormat::Text => format_criteria_text(&criteria),
        ListFormat::Json => format!("{}\n", serde_json::to_string_pretty(&criteria)?),
    };
    write_output(None, &output)
}

fn select_criteria(args: &CriteriaArgs) -> Vec<Criterion> {
    let mut criteria = if args.level.is_empty() {
        wcag22_criteria().to_vec()
    } else {
        criteria_by_level(&args.level)
    };
    if args.automated {
        criteria.retain(|c| c.can_automate);
    }
    criteria
}

const fn coverage_tag(criterion: &Criterion) -> &'static str {
    if !criterion.has_rules() {
        "manual"
    } else if criterion.can_automate {
        "automated"
    } else {
        "hybrid"
    }
}

/// One aligned line per criterion followed by a count.
#[must_use]
pub fn format_criteria_text(criteria: &[Criterion]) -> String {
    let mut output = String::new();
    for criterion in criteria {
        writeln!(
            output,
            "{:<8}{:<4}{} [{}]",
            criterion.id,
            criterion.level.as_str(),
            criterion.name,
            coverage_tag(criterion)
        )
        .ok();
    }
    writeln!(output, "\n{} criteria", criteria.len()).ok();
    output
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod tests;
