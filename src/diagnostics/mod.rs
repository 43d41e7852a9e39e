//! Collection and reporting of recovered problems.
//!
//! Record-level and file-level problems never abort a run. Extractors,
//! the resolver and the attribute fallback push diagnostics into a `Report`
//! that is printed once at the end of the run.

mod checks;
mod report;

pub use checks::{check_dangling_parents, check_duplicate_names};
pub use report::{Diagnostic, Report, Severity};

use crate::output::Printer;

/// Maximum number of individual diagnostics printed before summarizing.
pub const MAX_PRINTED: usize = 40;

/// Print diagnostics to stderr, followed by a summary line.
pub fn print_diagnostics(report: &Report, printer: &Printer) {
    for d in report.iter().take(MAX_PRINTED) {
        let mut message = format!("[{}] {}", d.code, d.message);
        if let Some(source) = &d.source {
            message.push_str(&format!(" {}", printer.dim(&format!("({})", source))));
        }
        let verb = d.severity.to_string();
        match d.severity {
            Severity::Error => printer.error(&verb, &message),
            Severity::Warning => printer.warning(&verb, &message),
        }
        if let Some(help) = &d.help {
            printer.info("help", help);
        }
    }

    if report.len() > MAX_PRINTED {
        printer.info("...", &format!("and {} more", report.len() - MAX_PRINTED));
    }

    let errors = report.error_count();
    let warnings = report.warning_count();

    if errors > 0 {
        printer.error(
            "Finished",
            &format!("with {} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Finished", &format!("with {} warning(s)", warnings));
    } else {
        printer.status("Finished", "without warnings");
    }
}
