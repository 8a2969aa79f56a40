use crate::{Constant, Label, Value};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Term {
    pub kind: TermKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum TermKind {
    Ret(Option<Value>),
    Br(Label),
    CondBr {
        cond: Value,
        true_target: Label,
        false_target: Label,
    },
    Switch {
        x: Value,
        default: Label,
        cases: Vec<Case>,
    },
    Unreachable,
    Other {
        opcode: String,
    },
}

impl TermKind {
    pub fn at(self, source: Source) -> Term {
        Term { kind: self, source }
    }
}

#[derive(Clone, Debug)]
pub struct Case {
    pub value: Constant,
    pub target: Label,
}
