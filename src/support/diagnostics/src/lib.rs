mod error;
mod show;
mod warning;

use core::fmt::Debug;
use derive_more::{Display, IsVariant};
pub use error::ErrorDiagnostic;
pub use show::{Show, write_location};
use source_files::SourceFiles;
pub use warning::WarningDiagnostic;

/// How seriously a diagnostic should be taken.
///
/// Only errors make a build unsuccessful.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IsVariant)]
pub enum Severity {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

pub trait Diagnostic: Show + Send + Sync {
    fn severity(&self) -> Severity;
}

#[derive(Clone, Debug, Default)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub suppress_warnings: bool,
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    diagnostics: Vec<Box<dyn Diagnostic>>,
    num_errors: usize,
    flags: DiagnosticFlags,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("len", &self.diagnostics.len())
            .field("num_errors", &self.num_errors)
            .finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            diagnostics: Vec::new(),
            num_errors: 0,
            flags,
        }
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn push(&mut self, diagnostic: impl Diagnostic + 'static) {
        let severity = diagnostic.severity();

        if severity.is_warning() && self.flags.suppress_warnings {
            return;
        }

        if severity.is_error() {
            self.num_errors += 1;
        }

        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.push(Box::new(diagnostic));
        }
    }

    pub fn extend<D: Diagnostic + 'static>(&mut self, diagnostics: impl IntoIterator<Item = D>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.num_errors > 0
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Diagnostic> {
        self.diagnostics.iter().map(|diagnostic| &**diagnostic)
    }

    /// Renders every collected diagnostic, one per line.
    pub fn render_all(&self) -> String {
        let mut rendered = String::new();

        for diagnostic in self.iter() {
            rendered.push_str(&diagnostic.to_show_string(self.source_files));
            rendered.push('\n');
        }

        rendered
    }

    pub fn print_all(&self) {
        for diagnostic in self.iter() {
            self.print(diagnostic);
        }
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        eprintln!("{}", diagnostic.to_show_string(self.source_files));
    }
}
