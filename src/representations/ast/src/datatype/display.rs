use super::{FuncType, StructType, Type, TypeKind};
use itertools::Itertools;
use std::fmt::Display;

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Void => write!(f, "void"),
            TypeKind::Label => write!(f, "label"),
            TypeKind::Integer(bits) => write!(f, "i{}", bits),
            TypeKind::Float(kind) => write!(f, "{}", kind),
            TypeKind::Ptr(ptr) if ptr.addr_space == 0 => write!(f, "{}*", ptr.pointee),
            TypeKind::Ptr(ptr) => write!(f, "{} addrspace({})*", ptr.pointee, ptr.addr_space),
            TypeKind::Array(len, elem) => write!(f, "[{} x {}]", len, elem),
            TypeKind::Vector(len, elem) => write!(f, "<{} x {}>", len, elem),
            TypeKind::Struct(structure) => write!(f, "{}", structure),
            TypeKind::Func(func) => write!(f, "{}", func),
            TypeKind::Named(name) => write!(f, "%{}", name),
        }
    }
}

impl Display for StructType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.fields.iter().join(", ");

        match (self.is_packed, fields.is_empty()) {
            (false, true) => write!(f, "{{}}"),
            (false, false) => write!(f, "{{ {} }}", fields),
            (true, true) => write!(f, "<{{}}>"),
            (true, false) => write!(f, "<{{ {} }}>", fields),
        }
    }
}

impl Display for FuncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut params = self.params.iter().map(ToString::to_string).collect_vec();

        if self.is_variadic {
            params.push("...".into());
        }

        write!(f, "{} ({})", self.return_type, params.join(", "))
    }
}
