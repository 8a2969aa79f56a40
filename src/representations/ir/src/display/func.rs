use crate::{
    BlockRef, Func, Instr, InstrKind, InstrRef, LocalIdents, Module, ParamRef, Term, TermKind,
    Value,
};
use std::fmt::Write;

pub fn write_func(w: &mut String, module: &Module, func: &Func) -> std::fmt::Result {
    let idents = func.idents();

    let mut params = Vec::with_capacity(func.params.len() + 1);
    for (i, param) in func.params.iter().enumerate() {
        if func.is_declaration() {
            params.push(param.ty.display(module).to_string());
        } else {
            params.push(format!(
                "{} %{}",
                param.ty.display(module),
                idents.param(ParamRef(i))
            ));
        }
    }

    if func.sig.is_variadic {
        params.push("...".into());
    }

    let head = format!(
        "{} @{}({})",
        func.sig.return_type.display(module),
        func.name,
        params.join(", ")
    );

    if func.is_declaration() {
        return writeln!(w, "declare {}", head);
    }

    writeln!(w, "define {} {{", head)?;

    for (i, block) in func.blocks.iter().enumerate() {
        if i != 0 {
            writeln!(w)?;
        }

        writeln!(w, "{}:", idents.block(BlockRef(i)))?;

        for (index, instr) in block.instrs.iter().enumerate() {
            write!(w, "  ")?;

            if instr.produces_value() {
                let instr_ref = InstrRef::new(BlockRef(i), index);
                write!(w, "%{} = ", idents.instr(instr_ref))?;
            }

            write_instr(w, module, func, &idents, instr)?;
            writeln!(w)?;
        }

        write!(w, "  ")?;
        write_term(w, module, func, &idents, &block.term)?;
        writeln!(w)?;
    }

    writeln!(w, "}}")
}

fn write_instr(
    w: &mut String,
    module: &Module,
    func: &Func,
    idents: &LocalIdents,
    instr: &Instr,
) -> std::fmt::Result {
    let plain = |value: &Value| value.display(module, func, idents).to_string();
    let typed = |value: &Value| value.display_typed(module, func, idents).to_string();

    match &instr.kind {
        InstrKind::Binary { op, x, y } => write!(w, "{} {}, {}", op, typed(x), plain(y)),
        InstrKind::Alloca { elem, count } => {
            write!(w, "alloca {}", elem.display(module))?;
            if let Some(count) = count {
                write!(w, ", {}", typed(count))?;
            }
            Ok(())
        }
        InstrKind::Load { elem, src } => {
            write!(w, "load {}, {}", elem.display(module), typed(src))
        }
        InstrKind::Store { src, dst } => write!(w, "store {}, {}", typed(src), typed(dst)),
        InstrKind::GetElementPtr {
            elem,
            src,
            indices,
            in_bounds,
        } => {
            write!(w, "getelementptr ")?;
            if *in_bounds {
                write!(w, "inbounds ")?;
            }
            write!(w, "{}, {}", elem.display(module), typed(src))?;
            for index in indices {
                write!(w, ", {}", typed(index))?;
            }
            Ok(())
        }
        InstrKind::Conversion { op, from, to } => {
            write!(w, "{} {} to {}", op, typed(from), to.display(module))
        }
        InstrKind::ICmp { pred, x, y } => write!(w, "icmp {} {}, {}", pred, typed(x), plain(y)),
        InstrKind::FCmp { pred, x, y } => write!(w, "fcmp {} {}, {}", pred, typed(x), plain(y)),
        InstrKind::Phi { incoming } => {
            write!(w, "phi {} ", instr.ty.display(module))?;
            for (i, incoming) in incoming.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write!(
                    w,
                    "[ {}, %{} ]",
                    plain(&incoming.value),
                    idents.block(incoming.pred)
                )?;
            }
            Ok(())
        }
        InstrKind::Select { cond, x, y } => {
            write!(w, "select {}, {}, {}", typed(cond), typed(x), typed(y))
        }
        InstrKind::Call { callee, args, sig } => {
            write!(
                w,
                "call {} {}(",
                sig.return_type.display(module),
                plain(callee)
            )?;
            for (i, arg) in args.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write!(w, "{}", typed(arg))?;
            }
            write!(w, ")")
        }
    }
}

fn write_term(
    w: &mut String,
    module: &Module,
    func: &Func,
    idents: &LocalIdents,
    term: &Term,
) -> std::fmt::Result {
    let typed = |value: &Value| value.display_typed(module, func, idents).to_string();

    match &term.kind {
        TermKind::Ret(None) => write!(w, "ret void"),
        TermKind::Ret(Some(value)) => write!(w, "ret {}", typed(value)),
        TermKind::Br(target) => write!(w, "br label %{}", idents.block(*target)),
        TermKind::CondBr {
            cond,
            true_target,
            false_target,
        } => write!(
            w,
            "br {}, label %{}, label %{}",
            typed(cond),
            idents.block(*true_target),
            idents.block(*false_target)
        ),
        TermKind::Switch { x, default, cases } => {
            writeln!(
                w,
                "switch {}, label %{} [",
                typed(x),
                idents.block(*default)
            )?;
            for case in cases {
                writeln!(
                    w,
                    "    {}, label %{}",
                    case.value.display_typed(module),
                    idents.block(case.target)
                )?;
            }
            write!(w, "  ]")
        }
        TermKind::Unreachable => write!(w, "unreachable"),
    }
}
