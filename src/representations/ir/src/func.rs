use crate::{FuncType, Instr, LocalIdents, Module, Term, Type, Value};
use source_files::Source;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamRef(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockRef(pub usize);

/// Position of an instruction within its function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstrRef {
    pub block: BlockRef,
    pub index: usize,
}

impl InstrRef {
    pub fn new(block: BlockRef, index: usize) -> Self {
        Self { block, index }
    }
}

#[derive(Clone, Debug)]
pub struct Func {
    pub name: String,
    pub sig: FuncType,
    pub params: Vec<Param>,
    pub blocks: Vec<BasicBlock>,
    pub source: Source,
}

impl Func {
    /// The type of the function as a value, which is its address.
    pub fn ty(&self) -> Type {
        Type::Func(Box::new(self.sig.clone())).pointer()
    }

    pub fn is_declaration(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn param(&self, param: ParamRef) -> &Param {
        &self.params[param.0]
    }

    pub fn block(&self, block: BlockRef) -> &BasicBlock {
        &self.blocks[block.0]
    }

    pub fn instr(&self, instr: InstrRef) -> &Instr {
        &self.blocks[instr.block.0].instrs[instr.index]
    }

    pub fn value_type(&self, module: &Module, value: &Value) -> Type {
        match value {
            Value::Param(param) => self.param(*param).ty.clone(),
            Value::Block(_) => Type::Label,
            Value::Instr(instr) => self.instr(*instr).ty.clone(),
            Value::Global(global_ref) => module.globals[*global_ref].ty(),
            Value::Func(func_ref) => module.funcs[*func_ref].ty(),
            Value::Constant(constant) => constant.ty(module),
        }
    }

    pub fn idents(&self) -> LocalIdents {
        LocalIdents::new(self)
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
    pub term: Term,
    pub source: Source,
}
