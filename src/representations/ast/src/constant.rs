use crate::Type;
use num_bigint::BigInt;
use primitives::{BinaryOp, ConversionOp};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Constant {
    pub ty: Type,
    pub kind: ConstantKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum ConstantKind {
    Int(BigInt),
    Float(f64),
    Null,
    Undef,
    ZeroInitializer,
    Global(String),
    Struct(Vec<Constant>),
    Array(Vec<Constant>),
    Vector(Vec<Constant>),
    CharArray(Vec<u8>),
    Expr(Box<ConstExpr>),
}

impl ConstantKind {
    pub fn at(self, ty: Type, source: Source) -> Constant {
        Constant {
            ty,
            kind: self,
            source,
        }
    }
}

#[derive(Clone, Debug)]
pub enum ConstExpr {
    Binary {
        op: BinaryOp,
        x: Constant,
        y: Constant,
    },
    Conversion {
        op: ConversionOp,
        from: Constant,
        to: Type,
    },
    GetElementPtr {
        elem: Type,
        src: Constant,
        indices: Vec<Constant>,
        in_bounds: bool,
    },
    ICmp {
        pred: String,
        x: Constant,
        y: Constant,
    },
    FCmp {
        pred: String,
        x: Constant,
        y: Constant,
    },
    Select {
        cond: Constant,
        x: Constant,
        y: Constant,
    },
}
