mod file;
mod key;
mod source;

pub use file::SourceFile;
pub use key::SourceFileKey;
pub use line_column::Location;
pub use source::Source;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SourceFiles {
    files: Vec<SourceFile>,
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);

    pub fn new() -> Self {
        // The <internal> file is used for IR entities that have no textual origin
        Self {
            files: vec![SourceFile::new("<internal>".into(), "".into())],
        }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    pub fn add(&mut self, filename: PathBuf, content: String) -> SourceFileKey {
        let key = SourceFileKey(
            u32::try_from(self.files.len()).expect("too many source files"),
        );
        self.files.push(SourceFile::new(filename, content));
        key
    }

    /// Creates a source for a byte offset into an added file.
    pub fn source_at(&self, key: SourceFileKey, offset: usize) -> Source {
        Source::new(key, Location::of_offset(self.get(key).content(), offset))
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}
