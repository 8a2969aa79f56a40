use crate::{Func, LocalIdents, Module, Value};
use std::fmt::Display;

/// Renders an operand within the function that uses it.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    module: &'a Module,
    func: &'a Func,
    idents: &'a LocalIdents,
    typed: bool,
}

impl Value {
    pub fn display<'a>(
        &'a self,
        module: &'a Module,
        func: &'a Func,
        idents: &'a LocalIdents,
    ) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            module,
            func,
            idents,
            typed: false,
        }
    }

    pub fn display_typed<'a>(
        &'a self,
        module: &'a Module,
        func: &'a Func,
        idents: &'a LocalIdents,
    ) -> ValueDisplay<'a> {
        ValueDisplay {
            typed: true,
            ..self.display(module, func, idents)
        }
    }
}

impl Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.typed {
            let ty = self.func.value_type(self.module, self.value);
            write!(f, "{} ", ty.display(self.module))?;
        }

        match self.value {
            Value::Param(param) => write!(f, "%{}", self.idents.param(*param)),
            Value::Block(block) => write!(f, "%{}", self.idents.block(*block)),
            Value::Instr(instr) => write!(f, "%{}", self.idents.instr(*instr)),
            Value::Global(global_ref) => write!(f, "@{}", self.module.globals[*global_ref].name),
            Value::Func(func_ref) => write!(f, "@{}", self.module.funcs[*func_ref].name),
            Value::Constant(constant) => write!(f, "{}", constant.display(self.module)),
        }
    }
}
