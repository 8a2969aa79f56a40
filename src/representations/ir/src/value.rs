use crate::{BlockRef, Constant, FuncRef, GlobalRef, InstrRef, ParamRef};
use derive_more::{From, IsVariant};

/// An operand.
///
/// Everything except constants is an identity, and its type is looked up
/// through the table that owns it (see [`Func::value_type`](crate::Func::value_type)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, From, IsVariant)]
pub enum Value {
    Param(ParamRef),
    Block(BlockRef),
    Instr(InstrRef),
    Global(GlobalRef),
    Func(FuncRef),
    Constant(Constant),
}
