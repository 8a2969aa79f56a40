use derive_more::Display;

/// Arithmetic and bitwise binary operators.
///
/// Every binary operator takes two operands of one type and produces a value
/// of that same type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum BinaryOp {
    #[display("add")]
    Add,
    #[display("fadd")]
    FAdd,
    #[display("sub")]
    Sub,
    #[display("fsub")]
    FSub,
    #[display("mul")]
    Mul,
    #[display("fmul")]
    FMul,
    #[display("udiv")]
    UDiv,
    #[display("sdiv")]
    SDiv,
    #[display("fdiv")]
    FDiv,
    #[display("urem")]
    URem,
    #[display("srem")]
    SRem,
    #[display("frem")]
    FRem,
    #[display("shl")]
    Shl,
    #[display("lshr")]
    LShr,
    #[display("ashr")]
    AShr,
    #[display("and")]
    And,
    #[display("or")]
    Or,
    #[display("xor")]
    Xor,
}

