//! Human-readable console report.

use yansi::Paint;

use crate::harness::StrategyReport;

/// Render the one-line report for a finished strategy.
///
/// The line reads
/// `The duplicate value using <name> is <value> which took <N> milliseconds to find.`
/// with `No duplicate found` in place of the value after a miss.
#[must_use]
pub fn render_line(report: &StrategyReport) -> String {
    let value = match report.duplicate {
        Some(value) => value.green().bold().to_string(),
        None => "No duplicate found".yellow().to_string(),
    };
    format!(
        "The duplicate value using {} is {} which took {:.2} milliseconds to find.",
        report.strategy.label().bold(),
        value,
        report.avg_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Strategy;

    fn report(duplicate: Option<i64>) -> StrategyReport {
        StrategyReport {
            strategy: Strategy::TriangularRev,
            duplicate,
            avg_ms: 12.5,
            iterations: 10,
        }
    }

    #[test]
    fn test_line_with_duplicate() {
        yansi::disable();
        assert_eq!(
            render_line(&report(Some(6))),
            "The duplicate value using backward triangular is 6 \
             which took 12.50 milliseconds to find."
        );
    }

    #[test]
    fn test_line_without_duplicate() {
        yansi::disable();
        let line = render_line(&report(None));
        assert!(line.contains("is No duplicate found which took"));
    }
}
