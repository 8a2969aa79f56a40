use crate::{Constant, Type};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Global {
    pub name: String,
    pub is_immutable: bool,
    pub content_type: Type,
    pub init: Option<Constant>,
    pub source: Source,
}
