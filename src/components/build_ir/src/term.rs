use crate::{BuildError, BuildErrorKind, func_builder::FuncBuilder};
use std::collections::HashSet;

pub fn resolve_term(builder: &mut FuncBuilder, term: &ast::Term) -> Result<ir::Term, BuildError> {
    let source = term.source;
    let return_type = &builder.func().sig.return_type;

    let kind = match &term.kind {
        ast::TermKind::Ret(None) => {
            builder.check_type("return value", return_type, &ir::Type::Void, source);
            ir::TermKind::Ret(None)
        }
        ast::TermKind::Ret(Some(value)) => {
            let (value, ty) = builder.resolve_typed(value)?;
            builder.check_type("return value", return_type, &ty, source);
            ir::TermKind::Ret(Some(value))
        }
        ast::TermKind::Br(label) => ir::TermKind::Br(builder.resolve_label(label)?),
        ast::TermKind::CondBr {
            cond,
            true_target,
            false_target,
        } => {
            let (cond_value, cond_type) = builder.resolve_typed(cond)?;
            builder.check_type("branch condition", &ir::Type::i1(), &cond_type, cond.source);

            ir::TermKind::CondBr {
                cond: cond_value,
                true_target: builder.resolve_label(true_target)?,
                false_target: builder.resolve_label(false_target)?,
            }
        }
        ast::TermKind::Switch { x, default, cases } => {
            let (x, x_type) = builder.resolve_typed(x)?;
            let default = builder.resolve_label(default)?;
            let mut seen = HashSet::with_capacity(cases.len());
            let mut resolved_cases = Vec::with_capacity(cases.len());

            for case in cases.iter() {
                let value = builder.resolve_constant(&case.value)?;
                let target = builder.resolve_label(&case.target)?;
                let module = &builder.mod_builder().module;

                builder.check_type("switch case", &x_type, &value.ty(module), case.value.source);

                if !seen.insert(value.clone()) {
                    builder.push_error(
                        BuildErrorKind::DuplicateSwitchCase {
                            value: value.display_typed(module).to_string(),
                        }
                        .at(case.value.source),
                    );
                }

                resolved_cases.push(ir::Case { value, target });
            }

            ir::TermKind::Switch {
                x,
                default,
                cases: resolved_cases,
            }
        }
        ast::TermKind::Unreachable => ir::TermKind::Unreachable,
        ast::TermKind::Other { opcode } => {
            return Err(BuildErrorKind::UnsupportedConstruct {
                construct: format!("{} terminator", opcode),
            }
            .at(source));
        }
    };

    Ok(ir::Term { kind, source })
}
