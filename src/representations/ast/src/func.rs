use crate::{Instr, Term, Type};
use source_files::Source;

/// A function definition, or a declaration when it has no blocks.
#[derive(Clone, Debug)]
pub struct Func {
    pub name: String,
    pub return_type: Type,
    pub params: Vec<Param>,
    pub is_variadic: bool,
    pub blocks: Vec<BasicBlock>,
    pub source: Source,
}

impl Func {
    pub fn is_declaration(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Param {
    pub name: Option<String>,
    pub ty: Type,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct BasicBlock {
    pub name: Option<String>,
    pub instrs: Vec<Instr>,
    pub term: Option<Term>,
    pub source: Source,
}
