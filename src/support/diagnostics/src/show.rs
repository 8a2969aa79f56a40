use source_files::{Source, SourceFiles};

pub trait Show {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result;

    fn to_show_string(&self, source_files: &SourceFiles) -> String {
        let mut message = String::new();

        // Writing into a String cannot fail
        let _ = self.show(&mut message, source_files);
        message
    }
}

/// Writes the `file:line:column` prefix shared by every diagnostic.
pub fn write_location(
    w: &mut dyn std::fmt::Write,
    source: Source,
    source_files: &SourceFiles,
) -> std::fmt::Result {
    write!(
        w,
        "{}:{}:{}",
        source_files.get(source.key).filename(),
        source.location.line,
        source.location.column,
    )
}
