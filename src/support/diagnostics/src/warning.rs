use crate::{Diagnostic, Severity, Show, show::write_location};
use colored::Colorize;
use source_files::{Source, SourceFiles};

#[derive(Debug)]
pub struct WarningDiagnostic {
    message: String,
    source: Option<Source>,
}

impl WarningDiagnostic {
    pub fn new(message: impl ToString, source: Source) -> Self {
        Self {
            message: message.to_string(),
            source: Some(source),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            source: None,
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result {
        if let Some(source) = self.source {
            write_location(w, source, source_files)?;
            write!(w, ": {} {}", "warning:".yellow().bold(), self.message)
        } else {
            write!(w, "{} {}", "warning:".yellow().bold(), self.message)
        }
    }
}

impl Diagnostic for WarningDiagnostic {
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}
