use crate::{BlockRef, Func, InstrRef, ParamRef};

/// Textual identities of a function's local values.
///
/// Named values keep their names. Unnamed parameters, blocks, and
/// value-producing instructions are numbered in order of appearance,
/// sharing a single counter.
#[derive(Clone, Debug)]
pub struct LocalIdents {
    params: Vec<String>,
    blocks: Vec<String>,
    instrs: Vec<Vec<String>>,
}

impl LocalIdents {
    pub fn new(func: &Func) -> Self {
        let mut next_slot = 0;
        let mut ident = |name: &Option<String>| match name {
            Some(name) => name.clone(),
            None => {
                let slot = next_slot;
                next_slot += 1;
                slot.to_string()
            }
        };

        let params = func.params.iter().map(|param| ident(&param.name)).collect();
        let mut blocks = Vec::with_capacity(func.blocks.len());
        let mut instrs = Vec::with_capacity(func.blocks.len());

        for block in func.blocks.iter() {
            blocks.push(ident(&block.name));
            instrs.push(
                block
                    .instrs
                    .iter()
                    .map(|instr| {
                        if instr.produces_value() {
                            ident(&instr.name)
                        } else {
                            String::new()
                        }
                    })
                    .collect(),
            );
        }

        Self {
            params,
            blocks,
            instrs,
        }
    }

    pub fn param(&self, param: ParamRef) -> &str {
        &self.params[param.0]
    }

    pub fn block(&self, block: BlockRef) -> &str {
        &self.blocks[block.0]
    }

    pub fn instr(&self, instr: InstrRef) -> &str {
        &self.instrs[instr.block.0][instr.index]
    }
}
