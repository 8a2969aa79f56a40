use crate::{BuildErrorKind, GlobalSymbol, ModBuilder, SymbolScope};
use ir::{FuncType, NamedTypeDef};

/// Gives every top-level declaration an identity before anything is bound.
///
/// Duplicates are reported and skipped, so one duplicate does not keep the
/// rest of the module from resolving.
pub fn index_module(mod_builder: &mut ModBuilder) {
    let ast = mod_builder.ast;

    for type_def in ast.type_defs.iter() {
        let module = &mut mod_builder.module;

        let result = mod_builder
            .types
            .try_insert_with(&type_def.name, type_def.source, || {
                module.types.alloc(ir::NamedType {
                    name: type_def.name.clone(),
                    def: NamedTypeDef::Placeholder,
                    source: type_def.source,
                })
            });

        match result {
            Ok(named_ref) => mod_builder.type_refs.push(Some(named_ref)),
            Err(previous) => {
                mod_builder.type_refs.push(None);
                mod_builder.errors.push(
                    BuildErrorKind::DuplicateSymbol {
                        name: type_def.name.clone(),
                        scope: SymbolScope::Type,
                        previous,
                    }
                    .at(type_def.source),
                );
            }
        }
    }

    // Globals and functions share one namespace
    for global in ast.globals.iter() {
        let module = &mut mod_builder.module;

        let result = mod_builder
            .globals
            .try_insert_with(&global.name, global.source, || {
                GlobalSymbol::Global(module.globals.alloc(ir::Global {
                    name: global.name.clone(),
                    is_immutable: global.is_immutable,
                    content_type: ir::Type::Void,
                    init: None,
                    source: global.source,
                }))
            });

        match result {
            Ok(symbol) => mod_builder.global_refs.push(symbol.as_global()),
            Err(previous) => {
                mod_builder.global_refs.push(None);
                mod_builder.errors.push(
                    BuildErrorKind::DuplicateSymbol {
                        name: global.name.clone(),
                        scope: SymbolScope::Global,
                        previous,
                    }
                    .at(global.source),
                );
            }
        }
    }

    for func in ast.funcs.iter() {
        let module = &mut mod_builder.module;

        let result = mod_builder
            .globals
            .try_insert_with(&func.name, func.source, || {
                GlobalSymbol::Func(module.funcs.alloc(ir::Func {
                    name: func.name.clone(),
                    sig: FuncType {
                        params: vec![],
                        return_type: ir::Type::Void,
                        is_variadic: func.is_variadic,
                    },
                    params: vec![],
                    blocks: vec![],
                    source: func.source,
                }))
            });

        match result {
            Ok(symbol) => mod_builder.func_refs.push(symbol.as_func()),
            Err(previous) => {
                mod_builder.func_refs.push(None);
                mod_builder.errors.push(
                    BuildErrorKind::DuplicateSymbol {
                        name: func.name.clone(),
                        scope: SymbolScope::Global,
                        previous,
                    }
                    .at(func.source),
                );
            }
        }
    }
}
