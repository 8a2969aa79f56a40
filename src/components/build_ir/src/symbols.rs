use indexmap::IndexMap;
use source_files::Source;

/// Name to identity mapping for one namespace.
///
/// Insertion order is kept so that anything derived from the table is
/// reported in declaration order.
#[derive(Debug)]
pub struct SymbolTable<T> {
    symbols: IndexMap<String, (T, Source)>,
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self {
            symbols: IndexMap::new(),
        }
    }
}

impl<T: Copy> SymbolTable<T> {
    /// Inserts a new name, or returns where it was already declared.
    ///
    /// The value is only created once the name is known to be new.
    pub fn try_insert_with(
        &mut self,
        name: &str,
        source: Source,
        make_value: impl FnOnce() -> T,
    ) -> Result<T, Source> {
        // Double lookup, so that the key only has to be allocated on success
        if let Some((_, previous)) = self.symbols.get(name) {
            return Err(*previous);
        }

        let value = make_value();
        self.symbols.insert(name.into(), (value, source));
        Ok(value)
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.symbols.get(name).map(|(value, _)| *value)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_files::{Location, SourceFiles};

    #[test]
    fn test_duplicate_reports_first_site() {
        let key = SourceFiles::INTERNAL_KEY;
        let first = Source::new(key, Location::new(1, 1));
        let second = Source::new(key, Location::new(2, 1));

        let mut table = SymbolTable::default();
        assert_eq!(table.try_insert_with("x", first, || 1), Ok(1));

        let mut made = false;
        let previous = table
            .try_insert_with("x", second, || {
                made = true;
                2
            })
            .unwrap_err();

        assert!(!made);
        assert_eq!(previous.location, first.location);
        assert_eq!(table.get("x"), Some(1));
        assert_eq!(table.len(), 1);
    }
}
