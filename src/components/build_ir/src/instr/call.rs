use crate::{BuildError, BuildErrorKind, func_builder::FuncBuilder};
use source_files::Source;

pub fn resolve_call(
    builder: &mut FuncBuilder,
    return_type: &ast::Type,
    callee: &ast::Value,
    args: &[ast::Value],
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let declared = builder.resolve_type(return_type)?;
    let callee_name = callee_name(callee);
    let (callee, callee_type) = builder.resolve_typed(callee)?;

    let sig = match builder.structural(&callee_type) {
        Some(ir::Type::Ptr(ptr)) => match builder.structural(&ptr.pointee) {
            Some(ir::Type::Func(sig)) => *sig,
            _ => return Err(not_callable(builder, &callee_type, source)),
        },
        _ => return Err(not_callable(builder, &callee_type, source)),
    };

    // Either just the return type is written, or the whole signature
    match builder.structural(&declared) {
        Some(ir::Type::Func(declared_sig)) => builder.check_type(
            format!("signature of call to '{}'", callee_name),
            &ir::Type::Func(Box::new(sig.clone())),
            &ir::Type::Func(declared_sig),
            source,
        ),
        _ => builder.check_type(
            format!("return type of call to '{}'", callee_name),
            &sig.return_type,
            &declared,
            source,
        ),
    }

    let args = args
        .iter()
        .map(|arg| builder.resolve_typed(arg).map(|resolved| (resolved, arg.source)))
        .collect::<Result<Vec<_>, _>>()?;

    if builder.mod_builder().options.check_call_signatures {
        let arity_ok = if sig.is_variadic {
            args.len() >= sig.params.len()
        } else {
            args.len() == sig.params.len()
        };

        if !arity_ok {
            builder.push_error(
                BuildErrorKind::CallArityMismatch {
                    callee: callee_name.clone(),
                    expected: sig.params.len(),
                    found: args.len(),
                    is_variadic: sig.is_variadic,
                }
                .at(source),
            );
        }

        for (i, (((_, arg_type), arg_source), param_type)) in
            args.iter().zip(sig.params.iter()).enumerate()
        {
            builder.check_type(
                format!("argument {} of call to '{}'", i + 1, callee_name),
                param_type,
                arg_type,
                *arg_source,
            );
        }
    }

    Ok((
        sig.return_type.clone(),
        ir::InstrKind::Call {
            callee,
            args: args.into_iter().map(|((value, _), _)| value).collect(),
            sig,
        },
    ))
}

fn not_callable(builder: &FuncBuilder, callee_type: &ir::Type, source: Source) -> BuildError {
    BuildErrorKind::NotCallable {
        found: builder.type_name(callee_type),
    }
    .at(source)
}

fn callee_name(callee: &ast::Value) -> String {
    match &callee.kind {
        ast::ValueKind::Local(name) => format!("%{}", name),
        ast::ValueKind::Global(name) => format!("@{}", name),
        ast::ValueKind::Constant(_) => "<constant>".into(),
    }
}
