mod call;
mod compare;
mod memory;
mod phi;

use crate::{BuildError, BuildErrorKind, func_builder::FuncBuilder};

/// Translates one instruction, whose result type follows from its operands.
pub fn resolve_instr(
    builder: &mut FuncBuilder,
    ast_instr: &ast::Instr,
) -> Result<ir::Instr, BuildError> {
    let source = ast_instr.source;

    let (ty, kind) = match &ast_instr.kind {
        ast::InstrKind::Binary { op, x, y } => {
            let (x, x_type) = builder.resolve_typed(x)?;
            let (y, y_type) = builder.resolve_typed(y)?;
            builder.check_type(format!("operands of '{}'", op), &x_type, &y_type, source);
            (x_type, ir::InstrKind::Binary { op: *op, x, y })
        }
        ast::InstrKind::Alloca { elem, count } => memory::resolve_alloca(builder, elem, count)?,
        ast::InstrKind::Load { elem, src } => memory::resolve_load(builder, elem, src, source)?,
        ast::InstrKind::Store { src, dst } => memory::resolve_store(builder, src, dst, source)?,
        ast::InstrKind::GetElementPtr {
            elem,
            src,
            indices,
            in_bounds,
        } => memory::resolve_gep(builder, elem, src, indices, *in_bounds, source)?,
        ast::InstrKind::Conversion { op, from, to } => {
            let from = builder.resolve_value(from)?;
            let to = builder.resolve_type(to)?;

            (
                to.clone(),
                ir::InstrKind::Conversion { op: *op, from, to },
            )
        }
        ast::InstrKind::ICmp { pred, x, y } => compare::resolve_icmp(builder, pred, x, y, source)?,
        ast::InstrKind::FCmp { pred, x, y } => compare::resolve_fcmp(builder, pred, x, y, source)?,
        ast::InstrKind::Select { cond, x, y } => {
            compare::resolve_select(builder, cond, x, y, source)?
        }
        ast::InstrKind::Phi { ty, incoming } => phi::resolve_phi(builder, ty, incoming)?,
        ast::InstrKind::Call {
            return_type,
            callee,
            args,
        } => call::resolve_call(builder, return_type, callee, args, source)?,
        ast::InstrKind::Other { opcode } => {
            return Err(BuildErrorKind::UnsupportedConstruct {
                construct: format!("{} instruction", opcode),
            }
            .at(source));
        }
    };

    Ok(ir::Instr {
        name: ast_instr.name.clone(),
        ty,
        kind,
        source,
    })
}
