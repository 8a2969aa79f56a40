/*
    ==================  representations/ast/src/lib.rs  ======================
    Syntactic tree of a textual IR module, as produced by a parser.

    Names are still plain strings and operand types are whatever was written,
    nothing here has been checked against anything else.
    ---------------------------------------------------------------------------
*/

mod constant;
mod datatype;
mod func;
mod global;
mod instr;
mod term;
mod value;

pub use constant::*;
pub use datatype::*;
pub use func::*;
pub use global::*;
pub use instr::*;
pub use term::*;
pub use value::*;

#[derive(Clone, Debug, Default)]
pub struct Module {
    pub type_defs: Vec<TypeDef>,
    pub globals: Vec<Global>,
    pub funcs: Vec<Func>,
}
