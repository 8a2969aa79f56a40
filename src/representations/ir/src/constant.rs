use crate::{FuncRef, GlobalRef, Module, Type};
use num_bigint::BigInt;
use ordered_float::OrderedFloat;
use primitives::{BinaryOp, ConversionOp, FloatPred, IntPred};

/// A self-typed constant.
///
/// Equality is structural, so two constants are equal exactly when they
/// denote the same value of the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    Int { ty: Type, value: BigInt },
    Float { ty: Type, value: OrderedFloat<f64> },
    Null(Type),
    Undef(Type),
    ZeroInitializer(Type),
    Global(GlobalRef),
    Func(FuncRef),
    Struct { ty: Type, fields: Vec<Constant> },
    Array { ty: Type, elems: Vec<Constant> },
    Vector { ty: Type, elems: Vec<Constant> },
    CharArray { ty: Type, bytes: Vec<u8> },
    Expr(Box<ConstExpr>),
}

impl Constant {
    pub fn ty(&self, module: &Module) -> Type {
        match self {
            Constant::Int { ty, .. }
            | Constant::Float { ty, .. }
            | Constant::Null(ty)
            | Constant::Undef(ty)
            | Constant::ZeroInitializer(ty)
            | Constant::Struct { ty, .. }
            | Constant::Array { ty, .. }
            | Constant::Vector { ty, .. }
            | Constant::CharArray { ty, .. } => ty.clone(),
            Constant::Global(global_ref) => module.globals[*global_ref].ty(),
            Constant::Func(func_ref) => module.funcs[*func_ref].ty(),
            Constant::Expr(expr) => expr.ty.clone(),
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Constant::Int { value, .. } => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstExpr {
    pub ty: Type,
    pub kind: ConstExprKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstExprKind {
    Binary {
        op: BinaryOp,
        x: Constant,
        y: Constant,
    },
    Conversion {
        op: ConversionOp,
        from: Constant,
    },
    GetElementPtr {
        elem: Type,
        src: Constant,
        indices: Vec<Constant>,
        in_bounds: bool,
    },
    ICmp {
        pred: IntPred,
        x: Constant,
        y: Constant,
    },
    FCmp {
        pred: FloatPred,
        x: Constant,
        y: Constant,
    },
    Select {
        cond: Constant,
        x: Constant,
        y: Constant,
    },
}
