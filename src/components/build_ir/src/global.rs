use crate::{BuildError, ModBuilder, constant::resolve_constant};

/// Binds the declared content type of a global.
///
/// Runs for every global before any initializer, so initializers that refer
/// to each other always see a content type.
pub fn fix_global_head(mod_builder: &mut ModBuilder, index: usize) -> Result<(), BuildError> {
    let Some(global_ref) = mod_builder.global_refs[index] else {
        return Ok(());
    };

    let ast_global = &mod_builder.ast.globals[index];
    let content_type = mod_builder.resolve_type(&ast_global.content_type)?;

    let global = &mut mod_builder.module.globals[global_ref];
    global.content_type = content_type;
    global.is_immutable = ast_global.is_immutable;
    Ok(())
}

/// Resolves the initializer of a global, whose type then becomes the
/// content type.
pub fn fix_global_init(mod_builder: &mut ModBuilder, index: usize) -> Result<(), BuildError> {
    let Some(global_ref) = mod_builder.global_refs[index] else {
        return Ok(());
    };

    let ast_global = &mod_builder.ast.globals[index];

    let Some(ast_init) = &ast_global.init else {
        return Ok(());
    };

    let mut errors = Vec::new();
    let init = resolve_constant(mod_builder, &mut errors, ast_init);
    mod_builder.errors.append(&mut errors);
    let init = init?;

    let init_type = init.ty(&mod_builder.module);
    let declared = &mod_builder.module.globals[global_ref].content_type;

    let mismatch = mod_builder.type_mismatch(
        format!("initializer of '@{}'", ast_global.name),
        declared,
        &init_type,
        ast_init.source,
        mod_builder.options.operand_type_mismatch,
    );
    mod_builder.errors.extend(mismatch);

    let global = &mut mod_builder.module.globals[global_ref];
    global.content_type = init_type;
    global.init = Some(init);
    Ok(())
}

/// Brings content types up to date with their initializers.
///
/// An initializer that takes the address of another global is typed by that
/// global's content type, which its own initializer may have replaced since.
/// Each pass settles at least one more link of such a chain, so there are at
/// most as many passes as globals.
pub fn refresh_global_types(mod_builder: &mut ModBuilder) {
    let global_refs = mod_builder.global_refs.iter().flatten().copied().collect::<Vec<_>>();

    for _ in 0..global_refs.len() {
        let mut changed = false;

        for &global_ref in global_refs.iter() {
            let global = &mod_builder.module.globals[global_ref];

            let Some(init) = &global.init else {
                continue;
            };

            let init_type = init.ty(&mod_builder.module);

            if init_type != global.content_type {
                mod_builder.module.globals[global_ref].content_type = init_type;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }
}
