use crate::{BuildError, ModBuilder, func_builder::FuncBuilder};
use ir::{FuncRef, FuncType};
use itertools::Itertools;
use log::{trace, warn};
use rayon::{ThreadPoolBuilder, prelude::*};

/// Binds the signature and parameters of a function.
///
/// Runs for every function before any body, so calls can be typed no matter
/// where the callee is declared.
pub fn fix_func_head(mod_builder: &mut ModBuilder, index: usize) -> Result<(), BuildError> {
    let Some(func_ref) = mod_builder.func_refs[index] else {
        return Ok(());
    };

    let ast_func = &mod_builder.ast.funcs[index];
    let return_type = mod_builder.resolve_type(&ast_func.return_type)?;

    let params = ast_func
        .params
        .iter()
        .map(|param| {
            Ok(ir::Param {
                name: param.name.clone(),
                ty: mod_builder.resolve_type(&param.ty)?,
                source: param.source,
            })
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    let func = &mut mod_builder.module.funcs[func_ref];
    func.sig = FuncType {
        params: params.iter().map(|param| param.ty.clone()).collect(),
        return_type,
        is_variadic: ast_func.is_variadic,
    };
    func.params = params;
    Ok(())
}

#[derive(Debug)]
pub struct FuncBody {
    pub func_ref: FuncRef,
    pub blocks: Option<Vec<ir::BasicBlock>>,
    pub errors: Vec<BuildError>,
}

/// Resolves the body of every function with a usable signature.
///
/// Bodies only read module-level state, so they may be resolved in parallel.
/// Results are in declaration order either way.
pub fn resolve_func_bodies(mod_builder: &ModBuilder) -> Vec<FuncBody> {
    let jobs = mod_builder
        .func_refs
        .iter()
        .enumerate()
        .filter_map(|(index, func_ref)| {
            let func_ref = (*func_ref)?;
            let is_definition = !mod_builder.ast.funcs[index].is_declaration();
            (is_definition && mod_builder.func_heads_ok[index]).then_some((index, func_ref))
        })
        .collect_vec();

    let options = mod_builder.options;

    if options.parallel_bodies && jobs.len() > 1 {
        match ThreadPoolBuilder::new()
            .num_threads(options.available_parallelism.get())
            .build()
        {
            Ok(pool) => {
                return pool.install(|| {
                    jobs.par_iter()
                        .map(|(index, func_ref)| resolve_func_body(mod_builder, *index, *func_ref))
                        .collect()
                });
            }
            Err(error) => warn!("resolving bodies sequentially, no thread pool: {}", error),
        }
    }

    jobs.iter()
        .map(|(index, func_ref)| resolve_func_body(mod_builder, *index, *func_ref))
        .collect()
}

fn resolve_func_body(mod_builder: &ModBuilder, index: usize, func_ref: FuncRef) -> FuncBody {
    let mut builder = FuncBuilder::new(mod_builder, index, func_ref);
    let result = builder.resolve();
    let mut errors = builder.into_errors();

    let blocks = match result {
        Ok(blocks) => Some(blocks),
        Err(error) => {
            errors.push(error);
            None
        }
    };

    trace!(
        "resolved body of '@{}' with {} diagnostics",
        mod_builder.module.funcs[func_ref].name,
        errors.len()
    );

    FuncBody {
        func_ref,
        blocks,
        errors,
    }
}
