use crate::{BlockRef, Constant, Value};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Term {
    pub kind: TermKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum TermKind {
    Ret(Option<Value>),
    Br(BlockRef),
    CondBr {
        cond: Value,
        true_target: BlockRef,
        false_target: BlockRef,
    },
    Switch {
        x: Value,
        default: BlockRef,
        cases: Vec<Case>,
    },
    Unreachable,
}

impl TermKind {
    pub fn successors(&self) -> Vec<BlockRef> {
        match self {
            TermKind::Ret(_) | TermKind::Unreachable => vec![],
            TermKind::Br(target) => vec![*target],
            TermKind::CondBr {
                true_target,
                false_target,
                ..
            } => vec![*true_target, *false_target],
            TermKind::Switch { default, cases, .. } => std::iter::once(*default)
                .chain(cases.iter().map(|case| case.target))
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Case {
    pub value: Constant,
    pub target: BlockRef,
}
