//! Diagnostic and error reporting for Lispy.
//!
//! Lexer and parser problems are collected as [`Diagnostic`]s and rendered
//! with ariadne, either to stderr or into a string.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.position())
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let report = build_report(filename, diagnostic, true);
    // A closed stderr leaves nowhere to report the failure.
    let _ = report.eprint((filename, Source::from(source)));
}

/// Render a diagnostic into a plain string without colors.
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> String {
    let report = build_report(filename, diagnostic, false);
    let mut out = Vec::new();
    if report
        .write((filename, Source::from(source)), &mut out)
        .is_err()
    {
        return format!("error: {}", diagnostic.message);
    }
    String::from_utf8_lossy(&out).into_owned()
}
