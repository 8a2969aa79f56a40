use crate::{BuildErrorKind, ModBuilder};
use ir::{NamedTypeDef, NamedTypeRef};
use log::trace;
use std::collections::HashSet;

pub fn fix_type_defs(mod_builder: &mut ModBuilder) {
    for (type_def, named_ref) in mod_builder
        .ast
        .type_defs
        .iter()
        .zip(mod_builder.type_refs.clone())
    {
        let Some(named_ref) = named_ref else {
            continue;
        };

        let def = match &type_def.def {
            Some(def) => match mod_builder.resolve_type(def) {
                Ok(resolved) => {
                    trace!("bound '%{}' to '{}'", type_def.name, def);
                    NamedTypeDef::Defined(resolved)
                }
                Err(error) => {
                    mod_builder.errors.push(error);
                    continue;
                }
            },
            None => NamedTypeDef::Opaque,
        };

        mod_builder.module.types[named_ref].def = def;
    }

    let cyclic = mod_builder
        .module
        .types
        .keys()
        .filter(|named_ref| is_alias_cycle(&mod_builder.module, *named_ref))
        .collect::<Vec<_>>();

    for named_ref in cyclic {
        let named = &mod_builder.module.types[named_ref];

        mod_builder.errors.push(
            BuildErrorKind::CyclicTypeDefinition {
                name: named.name.clone(),
            }
            .at(named.source),
        );
    }
}

/// Whether a named type is only ever an alias of itself, such as
/// `%A = type %B` together with `%B = type %A`.
fn is_alias_cycle(module: &ir::Module, start: NamedTypeRef) -> bool {
    let mut visited = HashSet::new();
    let mut current = start;

    loop {
        if !visited.insert(current) {
            return current == start;
        }

        match &module.types[current].def {
            NamedTypeDef::Defined(ir::Type::Named(next)) => current = *next,
            _ => return false,
        }
    }
}
