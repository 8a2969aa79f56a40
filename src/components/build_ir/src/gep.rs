use crate::{BuildErrorKind, ModBuilder};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// An already resolved `getelementptr` index.
pub struct GepIndex<'a> {
    pub ty: ir::Type,
    pub constant: Option<&'a BigInt>,
}

/// Computes the result type of `getelementptr elem, src, indices...`.
///
/// The first index steps over the base pointer, every later index steps into
/// the current aggregate. Struct fields can only be selected by constant
/// integers. A vector index turns the result into a vector of pointers with
/// the same length.
pub fn gep_result_type(
    mod_builder: &ModBuilder,
    src_type: &ir::Type,
    elem: &ir::Type,
    indices: &[GepIndex],
) -> Result<ir::Type, BuildErrorKind> {
    let Some(ir::Type::Ptr(ptr)) = mod_builder.structural(src_type) else {
        return Err(BuildErrorKind::NotAPointer {
            context: "getelementptr base".into(),
            found: mod_builder.type_name(src_type),
        });
    };

    let mut vector_len = None;

    for index in indices {
        let structural = mod_builder.structural(&index.ty);

        if !structural.as_ref().is_some_and(|ty| ty.is_int_or_int_vector()) {
            return Err(BuildErrorKind::NonIntegerOperand {
                context: "getelementptr index".into(),
                found: mod_builder.type_name(&index.ty),
            });
        }

        if let Some(ir::Type::Vector(len, _)) = structural {
            if vector_len.is_some_and(|existing| existing != len) {
                return Err(BuildErrorKind::InvalidGetElementPtr {
                    reason: "vector indices must all have the same length".into(),
                });
            }
            vector_len = Some(len);
        }
    }

    let mut current = elem.clone();

    for index in indices.iter().skip(1) {
        let Some(structural) = mod_builder.structural(&current) else {
            return Err(BuildErrorKind::InvalidGetElementPtr {
                reason: format!(
                    "cannot index into opaque type '{}'",
                    mod_builder.type_name(&current)
                ),
            });
        };

        current = match structural {
            ir::Type::Struct(structure) => {
                let Some(constant) = index.constant else {
                    return Err(BuildErrorKind::InvalidGetElementPtr {
                        reason: format!(
                            "struct '{}' must be indexed by a constant integer",
                            mod_builder.type_name(&current)
                        ),
                    });
                };

                let field = constant
                    .to_usize()
                    .and_then(|field| structure.fields.get(field))
                    .ok_or_else(|| BuildErrorKind::InvalidGetElementPtr {
                        reason: format!(
                            "field {} is out of range for '{}'",
                            constant,
                            mod_builder.type_name(&current)
                        ),
                    })?;

                field.clone()
            }
            ir::Type::Array(_, elem) | ir::Type::Vector(_, elem) => *elem,
            _ => {
                return Err(BuildErrorKind::InvalidGetElementPtr {
                    reason: format!(
                        "cannot index into non-aggregate type '{}'",
                        mod_builder.type_name(&current)
                    ),
                });
            }
        };
    }

    let result = ir::Type::Ptr(ir::PtrType {
        pointee: Box::new(current),
        addr_space: ptr.addr_space,
    });

    Ok(match vector_len {
        Some(len) => ir::Type::Vector(len, Box::new(result)),
        None => result,
    })
}
