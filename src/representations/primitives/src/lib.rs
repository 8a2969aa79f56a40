mod binary_op;
mod conversion_op;
mod float_kind;
mod predicate;

pub use binary_op::BinaryOp;
pub use conversion_op::ConversionOp;
pub use float_kind::FloatKind;
pub use predicate::{FloatPred, IntPred, UnknownPredicate};
