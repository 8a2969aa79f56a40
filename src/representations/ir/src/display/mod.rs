mod constant;
mod func;
mod types;
mod value;

use crate::{Module, NamedTypeDef};
pub use constant::ConstantDisplay;
use func::write_func;
use std::fmt::{Display, Write};
pub use types::TypeDisplay;
pub use value::ValueDisplay;

impl Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sections = Vec::new();

        if !self.types.is_empty() {
            let mut section = String::new();

            for named in self.types.values() {
                match &named.def {
                    NamedTypeDef::Defined(def) => writeln!(
                        section,
                        "%{} = type {}",
                        named.name,
                        def.display(self)
                    )?,
                    NamedTypeDef::Opaque => writeln!(section, "%{} = type opaque", named.name)?,
                    NamedTypeDef::Placeholder => {
                        writeln!(section, "%{} = type <unresolved>", named.name)?
                    }
                }
            }

            sections.push(section);
        }

        if !self.globals.is_empty() {
            let mut section = String::new();

            for global in self.globals.values() {
                let keyword = if global.is_immutable {
                    "constant"
                } else {
                    "global"
                };

                match &global.init {
                    Some(init) => writeln!(
                        section,
                        "@{} = {} {}",
                        global.name,
                        keyword,
                        init.display_typed(self)
                    )?,
                    None => writeln!(
                        section,
                        "@{} = external {} {}",
                        global.name,
                        keyword,
                        global.content_type.display(self)
                    )?,
                }
            }

            sections.push(section);
        }

        for func in self.funcs.values() {
            let mut section = String::new();
            write_func(&mut section, self, func)?;
            sections.push(section);
        }

        write!(f, "{}", sections.join("\n"))
    }
}
