use crate::NamedTypeRef;
use derive_more::IsVariant;
use primitives::FloatKind;

#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Type {
    Void,
    Label,
    Integer(u32),
    Float(FloatKind),
    Ptr(PtrType),
    Array(u64, Box<Type>),
    Vector(u64, Box<Type>),
    Struct(StructType),
    Func(Box<FuncType>),
    Named(NamedTypeRef),
}

impl Type {
    pub fn i1() -> Self {
        Self::Integer(1)
    }

    pub fn pointer(self) -> Self {
        Self::Ptr(PtrType {
            pointee: Box::new(self),
            addr_space: 0,
        })
    }

    pub fn is_int_or_int_vector(&self) -> bool {
        match self {
            Type::Integer(_) => true,
            Type::Vector(_, elem) => elem.is_integer(),
            _ => false,
        }
    }

    /// The type a comparison over operands of this type produces: `i1`, or a
    /// vector of `i1` with the same length for vector operands.
    pub fn comparison_result(&self) -> Self {
        match self {
            Type::Vector(len, _) => Type::Vector(*len, Box::new(Type::i1())),
            _ => Type::i1(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PtrType {
    pub pointee: Box<Type>,
    pub addr_space: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructType {
    pub fields: Vec<Type>,
    pub is_packed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FuncType {
    pub params: Vec<Type>,
    pub return_type: Type,
    pub is_variadic: bool,
}
