use crate::{ConstExpr, ConstExprKind, Constant, Module, Type};
use itertools::Itertools;
use std::fmt::Display;

pub struct ConstantDisplay<'a> {
    constant: &'a Constant,
    module: &'a Module,
    typed: bool,
}

impl Constant {
    /// Renders the constant without its type, as in `null` or `42`.
    pub fn display<'a>(&'a self, module: &'a Module) -> ConstantDisplay<'a> {
        ConstantDisplay {
            constant: self,
            module,
            typed: false,
        }
    }

    /// Renders the constant preceded by its type, as in `i32 42`.
    pub fn display_typed<'a>(&'a self, module: &'a Module) -> ConstantDisplay<'a> {
        ConstantDisplay {
            constant: self,
            module,
            typed: true,
        }
    }
}

impl Display for ConstantDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let module = self.module;

        if self.typed {
            write!(f, "{} ", self.constant.ty(module).display(module))?;
        }

        let elements = |elements: &[Constant]| {
            elements
                .iter()
                .map(|element| element.display_typed(module).to_string())
                .join(", ")
        };

        match self.constant {
            Constant::Int { ty, value } if *ty == Type::i1() => {
                write!(f, "{}", if value.bits() == 0 { "false" } else { "true" })
            }
            Constant::Int { value, .. } => write!(f, "{}", value),
            Constant::Float { value, .. } => write!(f, "{:?}", value.into_inner()),
            Constant::Null(_) => write!(f, "null"),
            Constant::Undef(_) => write!(f, "undef"),
            Constant::ZeroInitializer(_) => write!(f, "zeroinitializer"),
            Constant::Global(global_ref) => write!(f, "@{}", module.globals[*global_ref].name),
            Constant::Func(func_ref) => write!(f, "@{}", module.funcs[*func_ref].name),
            Constant::Struct { ty, fields } => {
                let is_packed = matches!(
                    module.structural(ty),
                    Some(Type::Struct(structure)) if structure.is_packed
                );

                match (is_packed, fields.is_empty()) {
                    (false, true) => write!(f, "{{}}"),
                    (false, false) => write!(f, "{{ {} }}", elements(fields)),
                    (true, true) => write!(f, "<{{}}>"),
                    (true, false) => write!(f, "<{{ {} }}>", elements(fields)),
                }
            }
            Constant::Array { elems, .. } => write!(f, "[{}]", elements(elems)),
            Constant::Vector { elems, .. } => write!(f, "<{}>", elements(elems)),
            Constant::CharArray { bytes, .. } => {
                write!(f, "c\"")?;
                for byte in bytes.iter().copied() {
                    if (byte.is_ascii_graphic() && byte != b'"' && byte != b'\\') || byte == b' ' {
                        write!(f, "{}", byte as char)?;
                    } else {
                        write!(f, "\\{:02X}", byte)?;
                    }
                }
                write!(f, "\"")
            }
            Constant::Expr(expr) => write_expr(f, module, expr),
        }
    }
}

fn write_expr(f: &mut std::fmt::Formatter<'_>, module: &Module, expr: &ConstExpr) -> std::fmt::Result {
    match &expr.kind {
        ConstExprKind::Binary { op, x, y } => write!(
            f,
            "{} ({}, {})",
            op,
            x.display_typed(module),
            y.display_typed(module)
        ),
        ConstExprKind::Conversion { op, from } => write!(
            f,
            "{} ({} to {})",
            op,
            from.display_typed(module),
            expr.ty.display(module)
        ),
        ConstExprKind::GetElementPtr {
            elem,
            src,
            indices,
            in_bounds,
        } => {
            write!(f, "getelementptr ")?;
            if *in_bounds {
                write!(f, "inbounds ")?;
            }
            write!(f, "({}, {}", elem.display(module), src.display_typed(module))?;
            for index in indices {
                write!(f, ", {}", index.display_typed(module))?;
            }
            write!(f, ")")
        }
        ConstExprKind::ICmp { pred, x, y } => write!(
            f,
            "icmp {} ({}, {})",
            pred,
            x.display_typed(module),
            y.display_typed(module)
        ),
        ConstExprKind::FCmp { pred, x, y } => write!(
            f,
            "fcmp {} ({}, {})",
            pred,
            x.display_typed(module),
            y.display_typed(module)
        ),
        ConstExprKind::Select { cond, x, y } => write!(
            f,
            "select ({}, {}, {})",
            cond.display_typed(module),
            x.display_typed(module),
            y.display_typed(module)
        ),
    }
}
