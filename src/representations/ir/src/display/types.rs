use crate::{FuncType, Module, StructType, Type};
use std::fmt::Display;

/// Renders a type, using the module to spell named types.
pub struct TypeDisplay<'a> {
    ty: &'a Type,
    module: &'a Module,
}

impl Type {
    pub fn display<'a>(&'a self, module: &'a Module) -> TypeDisplay<'a> {
        TypeDisplay { ty: self, module }
    }
}

impl Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let module = self.module;

        match self.ty {
            Type::Void => write!(f, "void"),
            Type::Label => write!(f, "label"),
            Type::Integer(bits) => write!(f, "i{}", bits),
            Type::Float(kind) => write!(f, "{}", kind),
            Type::Ptr(ptr) if ptr.addr_space == 0 => write!(f, "{}*", ptr.pointee.display(module)),
            Type::Ptr(ptr) => write!(
                f,
                "{} addrspace({})*",
                ptr.pointee.display(module),
                ptr.addr_space
            ),
            Type::Array(len, elem) => write!(f, "[{} x {}]", len, elem.display(module)),
            Type::Vector(len, elem) => write!(f, "<{} x {}>", len, elem.display(module)),
            Type::Struct(structure) => write_struct(f, module, structure),
            Type::Func(func) => write_func_type(f, module, func),
            Type::Named(named) => write!(f, "%{}", module.types[*named].name),
        }
    }
}

fn write_struct(
    f: &mut std::fmt::Formatter<'_>,
    module: &Module,
    structure: &StructType,
) -> std::fmt::Result {
    let (open, close) = if structure.is_packed {
        ("<{", "}>")
    } else {
        ("{", "}")
    };

    if structure.fields.is_empty() {
        return write!(f, "{}{}", open, close);
    }

    write!(f, "{} ", open)?;
    for (i, field) in structure.fields.iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", field.display(module))?;
    }
    write!(f, " {}", close)
}

fn write_func_type(
    f: &mut std::fmt::Formatter<'_>,
    module: &Module,
    func: &FuncType,
) -> std::fmt::Result {
    write!(f, "{} (", func.return_type.display(module))?;

    for (i, param) in func.params.iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", param.display(module))?;
    }

    if func.is_variadic {
        if !func.params.is_empty() {
            write!(f, ", ")?;
        }
        write!(f, "...")?;
    }

    write!(f, ")")
}
