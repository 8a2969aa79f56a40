use crate::{
    BuildError, BuildErrorKind, ModBuilder, SymbolScope,
    gep::{GepIndex, gep_result_type},
    predicate::{resolve_float_pred, resolve_int_pred},
};
use ordered_float::OrderedFloat;

/// Resolves a constant, which carries its own type.
///
/// Type disagreements that do not prevent building the constant are pushed
/// onto `errors`.
pub fn resolve_constant(
    mod_builder: &ModBuilder,
    errors: &mut Vec<BuildError>,
    constant: &ast::Constant,
) -> Result<ir::Constant, BuildError> {
    let ty = mod_builder.resolve_type(&constant.ty)?;
    let structural = mod_builder.structural(&ty);
    let source = constant.source;

    let invalid = |reason: String| BuildErrorKind::InvalidConstant { reason }.at(source);

    Ok(match &constant.kind {
        ast::ConstantKind::Int(value) => {
            if !structural.as_ref().is_some_and(ir::Type::is_integer) {
                return Err(invalid(format!(
                    "integer literal of type '{}'",
                    mod_builder.type_name(&ty)
                )));
            }

            ir::Constant::Int {
                ty,
                value: value.clone(),
            }
        }
        ast::ConstantKind::Float(value) => {
            if !structural.as_ref().is_some_and(ir::Type::is_float) {
                return Err(invalid(format!(
                    "floating-point literal of type '{}'",
                    mod_builder.type_name(&ty)
                )));
            }

            ir::Constant::Float {
                ty,
                value: OrderedFloat(*value),
            }
        }
        ast::ConstantKind::Null => {
            if !structural.as_ref().is_some_and(ir::Type::is_ptr) {
                return Err(invalid(format!(
                    "null of non-pointer type '{}'",
                    mod_builder.type_name(&ty)
                )));
            }

            ir::Constant::Null(ty)
        }
        ast::ConstantKind::Undef => ir::Constant::Undef(ty),
        ast::ConstantKind::ZeroInitializer => ir::Constant::ZeroInitializer(ty),
        ast::ConstantKind::Global(name) => {
            let symbol = mod_builder.globals.get(name).ok_or_else(|| {
                BuildErrorKind::UnknownSymbol {
                    name: name.clone(),
                    scope: SymbolScope::Global,
                }
                .at(source)
            })?;

            let resolved = ir::Constant::from(symbol);
            errors.extend(mod_builder.type_mismatch(
                format!("reference to '@{}'", name),
                &ty,
                &resolved.ty(&mod_builder.module),
                source,
                mod_builder.options.operand_type_mismatch,
            ));
            resolved
        }
        ast::ConstantKind::Struct(fields) => {
            let Some(ir::Type::Struct(structure)) = structural else {
                return Err(invalid(format!(
                    "struct literal of type '{}'",
                    mod_builder.type_name(&ty)
                )));
            };

            if structure.fields.len() != fields.len() {
                return Err(invalid(format!(
                    "'{}' has {} fields, but {} were given",
                    mod_builder.type_name(&ty),
                    structure.fields.len(),
                    fields.len()
                )));
            }

            let fields = resolve_elements(
                mod_builder,
                errors,
                fields,
                structure.fields.iter(),
                "struct field",
            )?;

            ir::Constant::Struct { ty, fields }
        }
        ast::ConstantKind::Array(elems) | ast::ConstantKind::Vector(elems) => {
            let is_array = matches!(constant.kind, ast::ConstantKind::Array(_));

            let (len, elem) = match structural {
                Some(ir::Type::Array(len, elem)) if is_array => (len, elem),
                Some(ir::Type::Vector(len, elem)) if !is_array => (len, elem),
                _ => {
                    return Err(invalid(format!(
                        "{} literal of type '{}'",
                        if is_array { "array" } else { "vector" },
                        mod_builder.type_name(&ty)
                    )));
                }
            };

            if len != elems.len() as u64 {
                return Err(invalid(format!(
                    "'{}' has {} elements, but {} were given",
                    mod_builder.type_name(&ty),
                    len,
                    elems.len()
                )));
            }

            let elems = resolve_elements(
                mod_builder,
                errors,
                elems,
                std::iter::repeat(&*elem),
                "element",
            )?;

            if is_array {
                ir::Constant::Array { ty, elems }
            } else {
                ir::Constant::Vector { ty, elems }
            }
        }
        ast::ConstantKind::CharArray(bytes) => match structural {
            Some(ir::Type::Array(len, elem))
                if *elem == ir::Type::Integer(8) && len == bytes.len() as u64 =>
            {
                ir::Constant::CharArray {
                    ty,
                    bytes: bytes.clone(),
                }
            }
            _ => {
                return Err(invalid(format!(
                    "string of {} bytes cannot have type '{}'",
                    bytes.len(),
                    mod_builder.type_name(&ty)
                )));
            }
        },
        ast::ConstantKind::Expr(expr) => {
            let expr = resolve_const_expr(mod_builder, errors, expr, source)?;

            errors.extend(mod_builder.type_mismatch(
                "constant expression",
                &ty,
                &expr.ty,
                source,
                mod_builder.options.operand_type_mismatch,
            ));

            ir::Constant::Expr(Box::new(expr))
        }
    })
}

fn resolve_elements<'t>(
    mod_builder: &ModBuilder,
    errors: &mut Vec<BuildError>,
    elements: &[ast::Constant],
    expected: impl Iterator<Item = &'t ir::Type>,
    what: &str,
) -> Result<Vec<ir::Constant>, BuildError> {
    elements
        .iter()
        .zip(expected)
        .map(|(element, expected)| {
            let resolved = resolve_constant(mod_builder, errors, element)?;

            errors.extend(mod_builder.type_mismatch(
                what,
                expected,
                &resolved.ty(&mod_builder.module),
                element.source,
                mod_builder.options.operand_type_mismatch,
            ));

            Ok(resolved)
        })
        .collect()
}

fn resolve_const_expr(
    mod_builder: &ModBuilder,
    errors: &mut Vec<BuildError>,
    expr: &ast::ConstExpr,
    source: source_files::Source,
) -> Result<ir::ConstExpr, BuildError> {
    let severity = mod_builder.options.operand_type_mismatch;
    let module = &mod_builder.module;

    let (ty, kind) = match expr {
        ast::ConstExpr::Binary { op, x, y } => {
            let x = resolve_constant(mod_builder, errors, x)?;
            let y = resolve_constant(mod_builder, errors, y)?;
            let x_type = x.ty(module);

            errors.extend(mod_builder.type_mismatch(
                format!("operands of '{}'", op),
                &x_type,
                &y.ty(module),
                source,
                severity,
            ));

            (x_type, ir::ConstExprKind::Binary { op: *op, x, y })
        }
        ast::ConstExpr::Conversion { op, from, to } => {
            let from = resolve_constant(mod_builder, errors, from)?;
            let to = mod_builder.resolve_type(to)?;
            (to, ir::ConstExprKind::Conversion { op: *op, from })
        }
        ast::ConstExpr::GetElementPtr {
            elem,
            src,
            indices,
            in_bounds,
        } => {
            let elem = mod_builder.resolve_type(elem)?;
            let src = resolve_constant(mod_builder, errors, src)?;
            let indices = indices
                .iter()
                .map(|index| resolve_constant(mod_builder, errors, index))
                .collect::<Result<Vec<_>, _>>()?;

            let src_type = src.ty(module);
            if let Some(ir::Type::Ptr(ptr)) = mod_builder.structural(&src_type) {
                errors.extend(mod_builder.type_mismatch(
                    "getelementptr element",
                    &ptr.pointee,
                    &elem,
                    source,
                    severity,
                ));
            }

            let gep_indices = indices
                .iter()
                .map(|index| GepIndex {
                    ty: index.ty(module),
                    constant: index.as_int(),
                })
                .collect::<Vec<_>>();

            let ty = gep_result_type(mod_builder, &src_type, &elem, &gep_indices)
                .map_err(|kind| kind.at(source))?;

            (
                ty,
                ir::ConstExprKind::GetElementPtr {
                    elem,
                    src,
                    indices,
                    in_bounds: *in_bounds,
                },
            )
        }
        ast::ConstExpr::ICmp { pred, x, y } => {
            let pred = resolve_int_pred(pred, source)?;
            let x = resolve_constant(mod_builder, errors, x)?;
            let y = resolve_constant(mod_builder, errors, y)?;
            let x_type = x.ty(module);

            errors.extend(mod_builder.type_mismatch(
                "operands of 'icmp'",
                &x_type,
                &y.ty(module),
                source,
                severity,
            ));

            (
                x_type.comparison_result(),
                ir::ConstExprKind::ICmp { pred, x, y },
            )
        }
        ast::ConstExpr::FCmp { pred, x, y } => {
            let pred = resolve_float_pred(pred, source)?;
            let x = resolve_constant(mod_builder, errors, x)?;
            let y = resolve_constant(mod_builder, errors, y)?;
            let x_type = x.ty(module);

            errors.extend(mod_builder.type_mismatch(
                "operands of 'fcmp'",
                &x_type,
                &y.ty(module),
                source,
                severity,
            ));

            (
                x_type.comparison_result(),
                ir::ConstExprKind::FCmp { pred, x, y },
            )
        }
        ast::ConstExpr::Select { cond, x, y } => {
            let cond = resolve_constant(mod_builder, errors, cond)?;
            let x = resolve_constant(mod_builder, errors, x)?;
            let y = resolve_constant(mod_builder, errors, y)?;
            let x_type = x.ty(module);

            errors.extend(mod_builder.type_mismatch(
                "operands of 'select'",
                &x_type,
                &y.ty(module),
                source,
                severity,
            ));

            (x_type, ir::ConstExprKind::Select { cond, x, y })
        }
    };

    Ok(ir::ConstExpr { ty, kind })
}
