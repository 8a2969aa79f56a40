mod display;

use derive_more::IsVariant;
use primitives::FloatKind;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub source: Source,
}

impl Type {
    pub fn new(kind: TypeKind, source: Source) -> Self {
        Self { kind, source }
    }

    pub fn pointer(self) -> Self {
        let source = self.source;
        TypeKind::Ptr(PtrType::new(self)).at(source)
    }
}

#[derive(Clone, Debug, IsVariant)]
pub enum TypeKind {
    Void,
    Label,
    Integer(u32),
    Float(FloatKind),
    Ptr(PtrType),
    Array(u64, Box<Type>),
    Vector(u64, Box<Type>),
    Struct(StructType),
    Func(Box<FuncType>),
    Named(String),
}

impl TypeKind {
    pub fn at(self, source: Source) -> Type {
        Type { kind: self, source }
    }
}

#[derive(Clone, Debug)]
pub struct PtrType {
    pub pointee: Box<Type>,
    pub addr_space: u32,
}

impl PtrType {
    pub fn new(pointee: Type) -> Self {
        Self {
            pointee: Box::new(pointee),
            addr_space: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StructType {
    pub fields: Vec<Type>,
    pub is_packed: bool,
}

#[derive(Clone, Debug)]
pub struct FuncType {
    pub return_type: Type,
    pub params: Vec<Type>,
    pub is_variadic: bool,
}

/// `%Name = type ...`, where a missing definition means `opaque`.
#[derive(Clone, Debug)]
pub struct TypeDef {
    pub name: String,
    pub def: Option<Type>,
    pub source: Source,
}
