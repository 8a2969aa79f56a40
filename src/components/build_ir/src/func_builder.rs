use crate::{
    BuildError, BuildErrorKind, ModBuilder, SymbolScope, constant::resolve_constant,
    instr::resolve_instr, symbols::SymbolTable, term::resolve_term,
};
use diagnostics::Severity;
use ir::{BlockRef, FuncRef, InstrRef, ParamRef};
use source_files::Source;

/// What a local name refers to within one function.
#[derive(Copy, Clone, Debug)]
pub enum LocalSymbol {
    Param(ParamRef),
    Block(BlockRef),
    Instr(InstrRef),
}

/// Resolution state of one instruction.
///
/// Instructions are fixed in order, except that an operand referring to a
/// later instruction fixes that instruction first.
enum Slot {
    Pending,
    InProgress,
    Done(ir::Instr),
}

impl Slot {
    fn into_done(self) -> Option<ir::Instr> {
        match self {
            Slot::Done(instr) => Some(instr),
            Slot::Pending | Slot::InProgress => None,
        }
    }
}

pub struct FuncBuilder<'mod_builder, 'ast> {
    mod_builder: &'mod_builder ModBuilder<'ast>,
    func: &'mod_builder ir::Func,
    ast_func: &'ast ast::Func,
    locals: SymbolTable<LocalSymbol>,
    block_idents: Vec<String>,
    slots: Vec<Vec<Slot>>,
    errors: Vec<BuildError>,
}

impl<'mod_builder, 'ast> FuncBuilder<'mod_builder, 'ast> {
    pub fn new(mod_builder: &'mod_builder ModBuilder<'ast>, index: usize, func_ref: FuncRef) -> Self {
        let ast_func = &mod_builder.ast.funcs[index];

        Self {
            mod_builder,
            func: &mod_builder.module.funcs[func_ref],
            ast_func,
            locals: SymbolTable::default(),
            block_idents: Vec::with_capacity(ast_func.blocks.len()),
            slots: Vec::with_capacity(ast_func.blocks.len()),
            errors: Vec::new(),
        }
    }

    pub fn mod_builder(&self) -> &'mod_builder ModBuilder<'ast> {
        self.mod_builder
    }

    pub fn func(&self) -> &'mod_builder ir::Func {
        self.func
    }

    pub fn into_errors(self) -> Vec<BuildError> {
        self.errors
    }

    /// Resolves the whole body, collecting recoverable errors along the way.
    pub fn resolve(&mut self) -> Result<Vec<ir::BasicBlock>, BuildError> {
        self.index()?;

        let mut terms = Vec::with_capacity(self.ast_func.blocks.len());

        for (block_index, ast_block) in self.ast_func.blocks.iter().enumerate() {
            let block = BlockRef(block_index);

            for index in 0..ast_block.instrs.len() {
                self.fix_instr(InstrRef::new(block, index))?;
            }

            let Some(term) = &ast_block.term else {
                return Err(BuildErrorKind::MalformedBlock {
                    block: self.block_idents[block_index].clone(),
                }
                .at(ast_block.source));
            };

            terms.push(resolve_term(self, term)?);
        }

        let slots = std::mem::take(&mut self.slots);

        Ok(self
            .ast_func
            .blocks
            .iter()
            .zip(slots)
            .zip(terms)
            .map(|((ast_block, slots), term)| ir::BasicBlock {
                name: ast_block.name.clone(),
                // Every slot is done, each instruction was fixed above
                instrs: slots.into_iter().filter_map(Slot::into_done).collect(),
                term,
                source: ast_block.source,
            })
            .collect())
    }

    /// Gives every parameter, block, and value-producing instruction a local
    /// identity. Unnamed ones are numbered in order of appearance.
    fn index(&mut self) -> Result<(), BuildError> {
        let mut next_slot = 0;

        for (index, param) in self.ast_func.params.iter().enumerate() {
            let name = numbered(&param.name, &mut next_slot);
            self.declare(name, param.source, LocalSymbol::Param(ParamRef(index)))?;
        }

        for (block_index, ast_block) in self.ast_func.blocks.iter().enumerate() {
            let block = BlockRef(block_index);
            let name = numbered(&ast_block.name, &mut next_slot);
            self.declare(name.clone(), ast_block.source, LocalSymbol::Block(block))?;
            self.block_idents.push(name);

            for (index, ast_instr) in ast_block.instrs.iter().enumerate() {
                if produces_value(ast_instr) {
                    let name = numbered(&ast_instr.name, &mut next_slot);
                    let instr = LocalSymbol::Instr(InstrRef::new(block, index));
                    self.declare(name, ast_instr.source, instr)?;
                }
            }

            self.slots
                .push(ast_block.instrs.iter().map(|_| Slot::Pending).collect());
        }

        Ok(())
    }

    fn declare(
        &mut self,
        name: String,
        source: Source,
        symbol: LocalSymbol,
    ) -> Result<(), BuildError> {
        self.locals
            .try_insert_with(&name, source, || symbol)
            .map(|_| ())
            .map_err(|previous| {
                BuildErrorKind::DuplicateSymbol {
                    name,
                    scope: SymbolScope::Local,
                    previous,
                }
                .at(source)
            })
    }

    fn ast_instr(&self, instr_ref: InstrRef) -> &'ast ast::Instr {
        &self.ast_func.blocks[instr_ref.block.0].instrs[instr_ref.index]
    }

    fn slot_mut(&mut self, instr_ref: InstrRef) -> &mut Slot {
        &mut self.slots[instr_ref.block.0][instr_ref.index]
    }

    fn slot(&self, instr_ref: InstrRef) -> &Slot {
        &self.slots[instr_ref.block.0][instr_ref.index]
    }

    /// Fixes an instruction unless it already is, returning its type.
    ///
    /// Operands referring to instructions that are not fixed yet are fixed
    /// first. Chains of forward references can be arbitrarily long, so this
    /// works through an explicit stack rather than recursing.
    fn fix_instr(&mut self, instr_ref: InstrRef) -> Result<ir::Type, BuildError> {
        match self.slot(instr_ref) {
            Slot::Done(instr) => return Ok(instr.ty.clone()),
            Slot::InProgress => return Err(self.cyclic_value(instr_ref)),
            Slot::Pending => (),
        }

        let mut stack = vec![instr_ref];
        let mut ty = ir::Type::Void;

        while let Some(&top) = stack.last() {
            match self.slot(top) {
                Slot::Done(_) => {
                    stack.pop();
                }
                Slot::Pending => {
                    *self.slot_mut(top) = Slot::InProgress;
                    let operands = self.pending_operands(top)?;
                    stack.extend(operands);
                }
                Slot::InProgress => {
                    // Everything it refers to is fixed by now
                    let ast_instr = self.ast_instr(top);
                    let instr = resolve_instr(self, ast_instr)?;

                    if top == instr_ref {
                        ty = instr.ty.clone();
                    }

                    *self.slot_mut(top) = Slot::Done(instr);
                    stack.pop();
                }
            }
        }

        Ok(ty)
    }

    /// Instructions an instruction refers to that still have to be fixed.
    ///
    /// A `phi` operand is never one of them, its type is declared.
    fn pending_operands(&self, instr_ref: InstrRef) -> Result<Vec<InstrRef>, BuildError> {
        let mut pending = Vec::new();

        for operand in self.ast_instr(instr_ref).kind.operands() {
            let ast::ValueKind::Local(name) = &operand.kind else {
                continue;
            };

            let Some(LocalSymbol::Instr(operand_ref)) = self.locals.get(name) else {
                continue;
            };

            if matches!(self.ast_instr(operand_ref).kind, ast::InstrKind::Phi { .. }) {
                continue;
            }

            match self.slot(operand_ref) {
                Slot::Done(_) => (),
                Slot::Pending => pending.push(operand_ref),
                Slot::InProgress => return Err(self.cyclic_value(operand_ref)),
            }
        }

        Ok(pending)
    }

    fn cyclic_value(&self, instr_ref: InstrRef) -> BuildError {
        let ast_instr = self.ast_instr(instr_ref);

        BuildErrorKind::CyclicValue {
            name: ast_instr.name.clone().unwrap_or_default(),
        }
        .at(ast_instr.source)
    }

    /// The type of an instruction's result, fixing it first if needed.
    ///
    /// A `phi` has a declared type, so it is never fixed on demand.
    pub fn instr_type(&mut self, instr_ref: InstrRef) -> Result<ir::Type, BuildError> {
        if let Slot::Done(instr) = self.slot_mut(instr_ref) {
            return Ok(instr.ty.clone());
        }

        match &self.ast_instr(instr_ref).kind {
            ast::InstrKind::Phi { ty, .. } => self.mod_builder.resolve_type(ty),
            _ => self.fix_instr(instr_ref),
        }
    }

    pub fn resolve_value(&mut self, value: &ast::Value) -> Result<ir::Value, BuildError> {
        match &value.kind {
            ast::ValueKind::Local(name) => match self.locals.get(name) {
                Some(LocalSymbol::Param(param)) => Ok(ir::Value::Param(param)),
                Some(LocalSymbol::Instr(instr)) => Ok(ir::Value::Instr(instr)),
                Some(LocalSymbol::Block(_)) => {
                    Err(BuildErrorKind::ExpectedValue { name: name.clone() }.at(value.source))
                }
                None => Err(BuildErrorKind::UnknownSymbol {
                    name: name.clone(),
                    scope: SymbolScope::Local,
                }
                .at(value.source)),
            },
            ast::ValueKind::Global(name) => self
                .mod_builder
                .globals
                .get(name)
                .map(ir::Value::from)
                .ok_or_else(|| {
                    BuildErrorKind::UnknownSymbol {
                        name: name.clone(),
                        scope: SymbolScope::Global,
                    }
                    .at(value.source)
                }),
            ast::ValueKind::Constant(constant) => {
                self.resolve_constant(constant).map(ir::Value::Constant)
            }
        }
    }

    /// Resolves an operand together with its type.
    pub fn resolve_typed(
        &mut self,
        value: &ast::Value,
    ) -> Result<(ir::Value, ir::Type), BuildError> {
        let value = self.resolve_value(value)?;
        let ty = self.value_type(&value)?;
        Ok((value, ty))
    }

    pub fn resolve_constant(&mut self, constant: &ast::Constant) -> Result<ir::Constant, BuildError> {
        resolve_constant(self.mod_builder, &mut self.errors, constant)
    }

    pub fn resolve_label(&self, label: &ast::Label) -> Result<BlockRef, BuildError> {
        match self.locals.get(&label.name) {
            Some(LocalSymbol::Block(block)) => Ok(block),
            Some(LocalSymbol::Param(_) | LocalSymbol::Instr(_)) => Err(BuildErrorKind::ExpectedBlock {
                name: label.name.clone(),
            }
            .at(label.source)),
            None => Err(BuildErrorKind::UnknownSymbol {
                name: label.name.clone(),
                scope: SymbolScope::Local,
            }
            .at(label.source)),
        }
    }

    pub fn value_type(&mut self, value: &ir::Value) -> Result<ir::Type, BuildError> {
        match value {
            ir::Value::Instr(instr_ref) => self.instr_type(*instr_ref),
            _ => Ok(self.func.value_type(&self.mod_builder.module, value)),
        }
    }

    pub fn resolve_type(&self, ty: &ast::Type) -> Result<ir::Type, BuildError> {
        self.mod_builder.resolve_type(ty)
    }

    pub fn structural(&self, ty: &ir::Type) -> Option<ir::Type> {
        self.mod_builder.structural(ty)
    }

    pub fn type_name(&self, ty: &ir::Type) -> String {
        self.mod_builder.type_name(ty)
    }

    pub fn push_error(&mut self, error: BuildError) {
        self.errors.push(error);
    }

    /// Reports an operand whose type is not the one expected.
    pub fn check_type(
        &mut self,
        context: impl ToString,
        expected: &ir::Type,
        found: &ir::Type,
        source: Source,
    ) {
        let severity = self.mod_builder.options.operand_type_mismatch;
        self.check_type_with(context, expected, found, source, severity);
    }

    pub fn check_type_with(
        &mut self,
        context: impl ToString,
        expected: &ir::Type,
        found: &ir::Type,
        source: Source,
        severity: Severity,
    ) {
        let mismatch = self
            .mod_builder
            .type_mismatch(context, expected, found, source, severity);
        self.errors.extend(mismatch);
    }
}

fn numbered(name: &Option<String>, next_slot: &mut usize) -> String {
    match name {
        Some(name) => name.clone(),
        None => {
            let slot = *next_slot;
            *next_slot += 1;
            slot.to_string()
        }
    }
}

/// Whether an instruction defines a local value. Stores and calls declared
/// to return `void` do not.
fn produces_value(instr: &ast::Instr) -> bool {
    match &instr.kind {
        ast::InstrKind::Store { .. } => false,
        ast::InstrKind::Call { return_type, .. } => match &return_type.kind {
            ast::TypeKind::Func(signature) => !signature.return_type.kind.is_void(),
            kind => !kind.is_void(),
        },
        ast::InstrKind::Other { .. } => instr.name.is_some(),
        _ => true,
    }
}
