#![allow(dead_code)]

use build_ir::{BuildErrorKind, BuildOptions, Built};
use num_bigint::BigInt;
use source_files::{Location, Source, SourceFiles};

pub fn line(line: u32) -> Source {
    Source::new(SourceFiles::INTERNAL_KEY, Location::new(line, 1))
}

pub fn here() -> Source {
    Source::internal()
}

pub fn int(bits: u32) -> ast::Type {
    ast::TypeKind::Integer(bits).at(here())
}

pub fn void() -> ast::Type {
    ast::TypeKind::Void.at(here())
}

pub fn double() -> ast::Type {
    ast::TypeKind::Float(primitives::FloatKind::Double).at(here())
}

pub fn vector(len: u64, elem: ast::Type) -> ast::Type {
    ast::TypeKind::Vector(len, Box::new(elem)).at(here())
}

pub fn array(len: u64, elem: ast::Type) -> ast::Type {
    ast::TypeKind::Array(len, Box::new(elem)).at(here())
}

pub fn named(name: &str) -> ast::Type {
    ast::TypeKind::Named(name.into()).at(here())
}

pub fn ptr(pointee: ast::Type) -> ast::Type {
    pointee.pointer()
}

pub fn structure(fields: Vec<ast::Type>) -> ast::Type {
    ast::TypeKind::Struct(ast::StructType {
        fields,
        is_packed: false,
    })
    .at(here())
}

pub fn local(name: &str) -> ast::Value {
    ast::ValueKind::Local(name.into()).at(here())
}

pub fn global(name: &str) -> ast::Value {
    ast::ValueKind::Global(name.into()).at(here())
}

pub fn int_const(bits: u32, value: i64) -> ast::Constant {
    ast::ConstantKind::Int(BigInt::from(value)).at(int(bits), here())
}

pub fn int_value(bits: u32, value: i64) -> ast::Value {
    int_const(bits, value).into()
}

pub fn null(ty: ast::Type) -> ast::Constant {
    ast::ConstantKind::Null.at(ty, here())
}

pub fn zero(ty: ast::Type) -> ast::Constant {
    ast::ConstantKind::ZeroInitializer.at(ty, here())
}

pub fn global_ref(ty: ast::Type, name: &str) -> ast::Constant {
    ast::ConstantKind::Global(name.into()).at(ty, here())
}

pub fn label(name: &str) -> ast::Label {
    ast::Label::new(name, here())
}

pub fn type_def(name: &str, def: ast::Type) -> ast::TypeDef {
    ast::TypeDef {
        name: name.into(),
        def: Some(def),
        source: here(),
    }
}

pub fn global_def(name: &str, content_type: ast::Type, init: Option<ast::Constant>) -> ast::Global {
    ast::Global {
        name: name.into(),
        is_immutable: false,
        content_type,
        init,
        source: here(),
    }
}

pub fn param(name: &str, ty: ast::Type) -> ast::Param {
    ast::Param {
        name: Some(name.into()),
        ty,
        source: here(),
    }
}

pub fn block(name: &str, instrs: Vec<ast::Instr>, term: ast::TermKind) -> ast::BasicBlock {
    ast::BasicBlock {
        name: Some(name.into()),
        instrs,
        term: Some(term.at(here())),
        source: here(),
    }
}

pub fn func(
    name: &str,
    return_type: ast::Type,
    params: Vec<ast::Param>,
    blocks: Vec<ast::BasicBlock>,
) -> ast::Func {
    ast::Func {
        name: name.into(),
        return_type,
        params,
        is_variadic: false,
        blocks,
        source: here(),
    }
}

pub fn declare(name: &str, return_type: ast::Type, params: Vec<ast::Type>) -> ast::Func {
    ast::Func {
        name: name.into(),
        return_type,
        params: params
            .into_iter()
            .map(|ty| ast::Param {
                name: None,
                ty,
                source: here(),
            })
            .collect(),
        is_variadic: false,
        blocks: vec![],
        source: here(),
    }
}

pub fn ret(value: ast::Value) -> ast::TermKind {
    ast::TermKind::Ret(Some(value))
}

pub fn ret_void() -> ast::TermKind {
    ast::TermKind::Ret(None)
}

pub fn build(module: &ast::Module) -> Built {
    build_ir::build(module, &BuildOptions::default())
}

pub fn error_kinds(built: &Built) -> Vec<&BuildErrorKind> {
    built.errors.iter().map(|error| &error.kind).collect()
}

/// Type of the result of the `index`th instruction of the first block.
pub fn instr_type(built: &Built, func: &str, index: usize) -> String {
    let module = &built.module;
    let func = &module.funcs[module.find_func(func).expect("function exists")];
    let instr = func.instr(ir::InstrRef::new(ir::BlockRef(0), index));
    instr.ty.display(module).to_string()
}
