use crate::{BuildError, func_builder::FuncBuilder};

pub fn resolve_phi(
    builder: &mut FuncBuilder,
    ty: &ast::Type,
    incoming: &[ast::PhiIncoming],
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let ty = builder.resolve_type(ty)?;

    let incoming = incoming
        .iter()
        .map(|incoming| {
            let (value, value_type) = builder.resolve_typed(&incoming.value)?;
            let pred = builder.resolve_label(&incoming.pred)?;

            builder.check_type(
                "incoming value of 'phi'",
                &ty,
                &value_type,
                incoming.value.source,
            );

            Ok(ir::PhiIncoming { value, pred })
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    Ok((ty, ir::InstrKind::Phi { incoming }))
}
