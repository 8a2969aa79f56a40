/*
    ==================  components/build_ir/src/lib.rs  ======================
    Resolves a parsed module into strongly-typed IR.

    Resolution happens in two passes at two scopes. At module scope, every
    named type, global, and function is given an identity before anything is
    bound, then type definitions, global heads, function signatures, and
    global initializers are fixed up in that order. At function scope, every
    parameter, block, and named instruction is indexed before any operand is
    resolved. This is what lets textual IR refer to things declared later.
    ---------------------------------------------------------------------------
*/

mod constant;
mod datatype;
mod error;
mod func_builder;
mod function;
mod gep;
mod global;
mod index;
mod instr;
mod options;
mod predicate;
mod symbols;
mod term;
mod type_def;

use diagnostics::{Diagnostics, Severity};
pub use error::{BuildError, BuildErrorKind, SymbolScope};
use function::{fix_func_head, resolve_func_bodies};
use global::{fix_global_head, fix_global_init, refresh_global_types};
use index::index_module;
use ir::{FuncRef, GlobalRef, NamedTypeRef};
use log::{debug, warn};
pub use options::BuildOptions;
use source_files::Source;
use symbols::SymbolTable;
use type_def::fix_type_defs;

/// What a name in the shared global namespace refers to.
#[derive(Copy, Clone, Debug)]
pub enum GlobalSymbol {
    Global(GlobalRef),
    Func(FuncRef),
}

impl GlobalSymbol {
    pub fn as_global(self) -> Option<GlobalRef> {
        match self {
            GlobalSymbol::Global(global_ref) => Some(global_ref),
            GlobalSymbol::Func(_) => None,
        }
    }

    pub fn as_func(self) -> Option<FuncRef> {
        match self {
            GlobalSymbol::Func(func_ref) => Some(func_ref),
            GlobalSymbol::Global(_) => None,
        }
    }
}

impl From<GlobalSymbol> for ir::Value {
    fn from(symbol: GlobalSymbol) -> Self {
        match symbol {
            GlobalSymbol::Global(global_ref) => ir::Value::Global(global_ref),
            GlobalSymbol::Func(func_ref) => ir::Value::Func(func_ref),
        }
    }
}

impl From<GlobalSymbol> for ir::Constant {
    fn from(symbol: GlobalSymbol) -> Self {
        match symbol {
            GlobalSymbol::Global(global_ref) => ir::Constant::Global(global_ref),
            GlobalSymbol::Func(func_ref) => ir::Constant::Func(func_ref),
        }
    }
}

pub struct ModBuilder<'a> {
    ast: &'a ast::Module,
    options: &'a BuildOptions,
    module: ir::Module,
    types: SymbolTable<NamedTypeRef>,
    globals: SymbolTable<GlobalSymbol>,

    // Identities of AST declarations by position, `None` for skipped duplicates
    type_refs: Vec<Option<NamedTypeRef>>,
    global_refs: Vec<Option<GlobalRef>>,
    func_refs: Vec<Option<FuncRef>>,

    func_heads_ok: Vec<bool>,
    errors: Vec<BuildError>,
}

impl<'a> ModBuilder<'a> {
    fn new(ast: &'a ast::Module, options: &'a BuildOptions) -> Self {
        Self {
            ast,
            options,
            module: ir::Module::new(),
            types: SymbolTable::default(),
            globals: SymbolTable::default(),
            type_refs: Vec::with_capacity(ast.type_defs.len()),
            global_refs: Vec::with_capacity(ast.globals.len()),
            func_refs: Vec::with_capacity(ast.funcs.len()),
            func_heads_ok: vec![false; ast.funcs.len()],
            errors: Vec::new(),
        }
    }

    fn collect(&mut self, result: Result<(), BuildError>) {
        if let Err(error) = result {
            self.errors.push(error);
        }
    }

    pub fn type_name(&self, ty: &ir::Type) -> String {
        ty.display(&self.module).to_string()
    }

    /// Creates an [`BuildErrorKind::OperandTypeMismatch`] if the types differ.
    pub fn type_mismatch(
        &self,
        context: impl ToString,
        expected: &ir::Type,
        found: &ir::Type,
        source: Source,
        severity: Severity,
    ) -> Option<BuildError> {
        (expected != found).then(|| {
            BuildErrorKind::OperandTypeMismatch {
                context: context.to_string(),
                expected: self.type_name(expected),
                found: self.type_name(found),
            }
            .at(source)
            .with_severity(severity)
        })
    }

    fn build(self) -> Built {
        Built {
            module: self.module,
            errors: self.errors,
        }
    }
}

/// A resolved module together with everything that went wrong resolving it.
///
/// Declarations that failed to resolve are still present in the module. A
/// function whose body failed to resolve is left without blocks.
#[derive(Debug)]
pub struct Built {
    pub module: ir::Module,
    pub errors: Vec<BuildError>,
}

impl Built {
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(BuildError::is_error)
    }

    pub fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.extend(self.errors.iter().cloned());
    }
}

pub fn build(ast: &ast::Module, options: &BuildOptions) -> Built {
    let mut mod_builder = ModBuilder::new(ast, options);

    index_module(&mut mod_builder);
    debug!(
        "indexed {} types and {} globals and functions",
        mod_builder.types.len(),
        mod_builder.globals.len()
    );

    fix_type_defs(&mut mod_builder);

    for index in 0..ast.globals.len() {
        let result = fix_global_head(&mut mod_builder, index);
        mod_builder.collect(result);
    }

    for index in 0..ast.funcs.len() {
        let result = fix_func_head(&mut mod_builder, index);
        mod_builder.func_heads_ok[index] = result.is_ok();
        mod_builder.collect(result);
    }

    // Initializers come after signatures so that constant expressions
    // over function addresses can be typed
    for index in 0..ast.globals.len() {
        let result = fix_global_init(&mut mod_builder, index);
        mod_builder.collect(result);
    }

    refresh_global_types(&mut mod_builder);

    debug!(
        "fixed module scope with {} diagnostics",
        mod_builder.errors.len()
    );

    let bodies = resolve_func_bodies(&mod_builder);
    debug!("resolved {} function bodies", bodies.len());

    for body in bodies {
        mod_builder.errors.extend(body.errors);

        match body.blocks {
            Some(blocks) => mod_builder.module.funcs[body.func_ref].blocks = blocks,
            None => warn!(
                "abandoned body of '@{}'",
                mod_builder.module.funcs[body.func_ref].name
            ),
        }
    }

    mod_builder.build()
}
