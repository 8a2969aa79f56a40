use crate::{Label, Type, Value};
use primitives::{BinaryOp, ConversionOp};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Instr {
    pub name: Option<String>,
    pub kind: InstrKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum InstrKind {
    Binary {
        op: BinaryOp,
        x: Value,
        y: Value,
    },
    Alloca {
        elem: Type,
        count: Option<Value>,
    },
    Load {
        elem: Type,
        src: Value,
    },
    Store {
        src: Value,
        dst: Value,
    },
    GetElementPtr {
        elem: Type,
        src: Value,
        indices: Vec<Value>,
        in_bounds: bool,
    },
    Conversion {
        op: ConversionOp,
        from: Value,
        to: Type,
    },
    ICmp {
        pred: String,
        x: Value,
        y: Value,
    },
    FCmp {
        pred: String,
        x: Value,
        y: Value,
    },
    Phi {
        ty: Type,
        incoming: Vec<PhiIncoming>,
    },
    Select {
        cond: Value,
        x: Value,
        y: Value,
    },
    Call {
        return_type: Type,
        callee: Value,
        args: Vec<Value>,
    },
    /// An instruction the parser understood but that has no translation.
    Other {
        opcode: String,
    },
}

impl InstrKind {
    pub fn at(self, source: Source) -> Instr {
        Instr {
            name: None,
            kind: self,
            source,
        }
    }

    pub fn named(self, name: impl ToString, source: Source) -> Instr {
        Instr {
            name: Some(name.to_string()),
            kind: self,
            source,
        }
    }

    /// Every operand, in the order written.
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            InstrKind::Binary { x, y, .. }
            | InstrKind::ICmp { x, y, .. }
            | InstrKind::FCmp { x, y, .. } => vec![x, y],
            InstrKind::Alloca { count, .. } => count.iter().collect(),
            InstrKind::Load { src, .. } => vec![src],
            InstrKind::Store { src, dst } => vec![src, dst],
            InstrKind::GetElementPtr { src, indices, .. } => {
                std::iter::once(src).chain(indices).collect()
            }
            InstrKind::Conversion { from, .. } => vec![from],
            InstrKind::Phi { incoming, .. } => {
                incoming.iter().map(|incoming| &incoming.value).collect()
            }
            InstrKind::Select { cond, x, y } => vec![cond, x, y],
            InstrKind::Call { callee, args, .. } => std::iter::once(callee).chain(args).collect(),
            InstrKind::Other { .. } => vec![],
        }
    }
}

#[derive(Clone, Debug)]
pub struct PhiIncoming {
    pub value: Value,
    pub pred: Label,
}
