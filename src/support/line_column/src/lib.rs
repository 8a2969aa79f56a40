use std::fmt::Display;

/// One-based line and column within a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Finds the location of a byte offset within `content`.
    ///
    /// Offsets past the end of the content are clamped to the end.
    pub fn of_offset(content: &str, offset: usize) -> Self {
        let mut location = Self::new(1, 1);

        for (i, c) in content.char_indices() {
            if i >= offset {
                break;
            }

            if c == '\n' {
                location.line += 1;
                location.column = 1;
            } else {
                location.column += 1;
            }
        }

        location
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_offset() {
        let content = "define void @f() {\nentry:\n  ret void\n}\n";
        assert_eq!(Location::of_offset(content, 0), Location::new(1, 1));
        assert_eq!(Location::of_offset(content, 19), Location::new(2, 1));
        assert_eq!(Location::of_offset(content, 28), Location::new(3, 3));
        assert_eq!(Location::of_offset(content, 1000).line, 5);
    }
}
