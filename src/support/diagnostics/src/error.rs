use crate::{Diagnostic, Severity, Show, show::write_location};
use colored::Colorize;
use source_files::{Source, SourceFiles};

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    source: Option<Source>,
}

impl ErrorDiagnostic {
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

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result {
        if let Some(source) = self.source {
            write_location(w, source, source_files)?;
            write!(w, ": {} {}", "error:".red().bold(), self.message)
        } else {
            write!(w, "{} {}", "error:".red().bold(), self.message)
        }
    }
}

impl Diagnostic for ErrorDiagnostic {
    fn severity(&self) -> Severity {
        Severity::Error
    }
}
