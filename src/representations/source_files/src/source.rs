use crate::{SourceFileKey, SourceFiles};
use line_column::Location;

// WARNING: Don't implement PartialEq, Eq, or Hash for this.
// Two IR entities are never equal just because they were declared
// at the same place, and resolved types must compare structurally.
#[derive(Copy, Clone, Debug)]
pub struct Source {
    pub key: SourceFileKey,
    pub location: Location,
}

impl Source {
    pub fn new(key: SourceFileKey, location: Location) -> Self {
        Self { key, location }
    }

    pub fn internal() -> Self {
        Self {
            key: SourceFiles::INTERNAL_KEY,
            location: Location { line: 1, column: 1 },
        }
    }

    pub fn is_internal(&self) -> bool {
        self.key == SourceFiles::INTERNAL_KEY
    }
}

