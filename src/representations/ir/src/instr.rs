use crate::{BlockRef, FuncType, Type, Value};
use primitives::{BinaryOp, ConversionOp, FloatPred, IntPred};
use source_files::Source;

/// A resolved instruction.
///
/// `ty` is the type of the value it produces, `void` for those that produce
/// none.
#[derive(Clone, Debug)]
pub struct Instr {
    pub name: Option<String>,
    pub ty: Type,
    pub kind: InstrKind,
    pub source: Source,
}

impl Instr {
    pub fn produces_value(&self) -> bool {
        !self.ty.is_void()
    }
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
        pred: IntPred,
        x: Value,
        y: Value,
    },
    FCmp {
        pred: FloatPred,
        x: Value,
        y: Value,
    },
    Phi {
        incoming: Vec<PhiIncoming>,
    },
    Select {
        cond: Value,
        x: Value,
        y: Value,
    },
    Call {
        callee: Value,
        args: Vec<Value>,
        sig: FuncType,
    },
}

#[derive(Clone, Debug)]
pub struct PhiIncoming {
    pub value: Value,
    pub pred: BlockRef,
}
