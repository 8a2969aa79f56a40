/*
    ==================  representations/ir/src/lib.rs  =======================
    Resolved intermediate representation.

    Every reference between entities is an identity (an arena index or a
    position within a function), never a structural copy, so recursive and
    forward-referencing definitions are representable.
    ---------------------------------------------------------------------------
*/

mod constant;
mod datatype;
mod display;
mod func;
mod idents;
mod instr;
mod term;
mod value;

use arena::{Arena, Idx, new_id_with_niche};
pub use constant::*;
pub use datatype::*;
pub use display::{ConstantDisplay, TypeDisplay, ValueDisplay};
pub use func::*;
pub use idents::LocalIdents;
pub use instr::*;
use source_files::Source;
pub use term::*;
pub use value::*;

new_id_with_niche!(NamedTypeId, u32);
new_id_with_niche!(GlobalId, u32);
new_id_with_niche!(FuncId, u32);

pub type NamedTypeRef = Idx<NamedTypeId, NamedType>;
pub type GlobalRef = Idx<GlobalId, Global>;
pub type FuncRef = Idx<FuncId, Func>;

#[derive(Clone, Debug, Default)]
pub struct Module {
    pub types: Arena<NamedTypeId, NamedType>,
    pub globals: Arena<GlobalId, Global>,
    pub funcs: Arena<FuncId, Func>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows named types until reaching a structural type.
    ///
    /// Returns `None` for opaque or still unresolved named types, and for
    /// alias chains that loop back on themselves.
    pub fn structural<'a>(&'a self, ty: &'a Type) -> Option<&'a Type> {
        let mut ty = ty;

        for _ in 0..=self.types.len() {
            match ty {
                Type::Named(named) => match &self.types[*named].def {
                    NamedTypeDef::Defined(def) => ty = def,
                    NamedTypeDef::Opaque | NamedTypeDef::Placeholder => return None,
                },
                _ => return Some(ty),
            }
        }

        None
    }

    pub fn find_type(&self, name: &str) -> Option<NamedTypeRef> {
        self.types
            .iter()
            .find(|(_, named)| named.name == name)
            .map(|(named_ref, _)| named_ref)
    }

    pub fn find_global(&self, name: &str) -> Option<GlobalRef> {
        self.globals
            .iter()
            .find(|(_, global)| global.name == name)
            .map(|(global_ref, _)| global_ref)
    }

    pub fn find_func(&self, name: &str) -> Option<FuncRef> {
        self.funcs
            .iter()
            .find(|(_, func)| func.name == name)
            .map(|(func_ref, _)| func_ref)
    }
}

#[derive(Clone, Debug)]
pub struct NamedType {
    pub name: String,
    pub def: NamedTypeDef,
    pub source: Source,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamedTypeDef {
    /// Indexed but not yet bound to a definition
    Placeholder,
    Opaque,
    Defined(Type),
}

#[derive(Clone, Debug)]
pub struct Global {
    pub name: String,
    pub is_immutable: bool,
    pub content_type: Type,
    pub init: Option<Constant>,
    pub source: Source,
}

impl Global {
    /// The type of the global as a value, which is its address.
    pub fn ty(&self) -> Type {
        self.content_type.clone().pointer()
    }
}
