use crate::{
    BuildError, BuildErrorKind,
    func_builder::FuncBuilder,
    gep::{GepIndex, gep_result_type},
};
use source_files::Source;

pub fn resolve_alloca(
    builder: &mut FuncBuilder,
    elem: &ast::Type,
    count: &Option<ast::Value>,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let elem = builder.resolve_type(elem)?;

    let count = match count {
        Some(ast_count) => {
            let (count, count_type) = builder.resolve_typed(ast_count)?;

            if !builder
                .structural(&count_type)
                .is_some_and(|ty| ty.is_integer())
            {
                return Err(BuildErrorKind::NonIntegerOperand {
                    context: "alloca count".into(),
                    found: builder.type_name(&count_type),
                }
                .at(ast_count.source));
            }

            Some(count)
        }
        None => None,
    };

    Ok((elem.clone().pointer(), ir::InstrKind::Alloca { elem, count }))
}

pub fn resolve_load(
    builder: &mut FuncBuilder,
    elem: &ast::Type,
    src: &ast::Value,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let elem = builder.resolve_type(elem)?;
    let (src, src_type) = builder.resolve_typed(src)?;

    let Some(ir::Type::Ptr(ptr)) = builder.structural(&src_type) else {
        return Err(BuildErrorKind::NotAPointer {
            context: "load source".into(),
            found: builder.type_name(&src_type),
        }
        .at(source));
    };

    // The pointee wins, the declared element type is only checked
    let severity = builder.mod_builder().options.load_element_mismatch;
    builder.check_type_with("load", &elem, &ptr.pointee, source, severity);

    Ok((*ptr.pointee, ir::InstrKind::Load { elem, src }))
}

pub fn resolve_store(
    builder: &mut FuncBuilder,
    src: &ast::Value,
    dst: &ast::Value,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let (src, src_type) = builder.resolve_typed(src)?;
    let (dst, dst_type) = builder.resolve_typed(dst)?;

    let Some(ir::Type::Ptr(ptr)) = builder.structural(&dst_type) else {
        return Err(BuildErrorKind::NotAPointer {
            context: "store destination".into(),
            found: builder.type_name(&dst_type),
        }
        .at(source));
    };

    builder.check_type("store", &ptr.pointee, &src_type, source);
    Ok((ir::Type::Void, ir::InstrKind::Store { src, dst }))
}

pub fn resolve_gep(
    builder: &mut FuncBuilder,
    elem: &ast::Type,
    src: &ast::Value,
    indices: &[ast::Value],
    in_bounds: bool,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let elem = builder.resolve_type(elem)?;
    let (src, src_type) = builder.resolve_typed(src)?;

    let indices = indices
        .iter()
        .map(|index| builder.resolve_typed(index))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(ir::Type::Ptr(ptr)) = builder.structural(&src_type) {
        builder.check_type("getelementptr element", &ptr.pointee, &elem, source);
    }

    let gep_indices = indices
        .iter()
        .map(|(value, ty)| GepIndex {
            ty: ty.clone(),
            constant: match value {
                ir::Value::Constant(constant) => constant.as_int(),
                _ => None,
            },
        })
        .collect::<Vec<_>>();

    let ty = gep_result_type(builder.mod_builder(), &src_type, &elem, &gep_indices)
        .map_err(|kind| kind.at(source))?;

    Ok((
        ty,
        ir::InstrKind::GetElementPtr {
            elem,
            src,
            indices: indices.into_iter().map(|(value, _)| value).collect(),
            in_bounds,
        },
    ))
}
