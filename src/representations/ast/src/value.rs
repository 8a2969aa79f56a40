use crate::Constant;
use derive_more::IsVariant;
use source_files::Source;

/// An operand as written.
///
/// Local and global references are untyped, the type of whatever they name
/// is authoritative. Constants carry the type they were written with.
#[derive(Clone, Debug)]
pub struct Value {
    pub kind: ValueKind,
    pub source: Source,
}

#[derive(Clone, Debug, IsVariant)]
pub enum ValueKind {
    Local(String),
    Global(String),
    Constant(Constant),
}

impl ValueKind {
    pub fn at(self, source: Source) -> Value {
        Value { kind: self, source }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        let source = constant.source;
        ValueKind::Constant(constant).at(source)
    }
}

/// A reference to a basic block, such as a branch target.
#[derive(Clone, Debug)]
pub struct Label {
    pub name: String,
    pub source: Source,
}

impl Label {
    pub fn new(name: impl ToString, source: Source) -> Self {
        Self {
            name: name.to_string(),
            source,
        }
    }
}
