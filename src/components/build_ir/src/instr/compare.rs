use crate::{
    BuildError,
    func_builder::FuncBuilder,
    predicate::{resolve_float_pred, resolve_int_pred},
};
use source_files::Source;

pub fn resolve_icmp(
    builder: &mut FuncBuilder,
    pred: &str,
    x: &ast::Value,
    y: &ast::Value,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let pred = resolve_int_pred(pred, source)?;
    let (x, x_type) = builder.resolve_typed(x)?;
    let (y, y_type) = builder.resolve_typed(y)?;

    builder.check_type("operands of 'icmp'", &x_type, &y_type, source);
    Ok((x_type.comparison_result(), ir::InstrKind::ICmp { pred, x, y }))
}

pub fn resolve_fcmp(
    builder: &mut FuncBuilder,
    pred: &str,
    x: &ast::Value,
    y: &ast::Value,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let pred = resolve_float_pred(pred, source)?;
    let (x, x_type) = builder.resolve_typed(x)?;
    let (y, y_type) = builder.resolve_typed(y)?;

    builder.check_type("operands of 'fcmp'", &x_type, &y_type, source);
    Ok((x_type.comparison_result(), ir::InstrKind::FCmp { pred, x, y }))
}

pub fn resolve_select(
    builder: &mut FuncBuilder,
    cond: &ast::Value,
    x: &ast::Value,
    y: &ast::Value,
    source: Source,
) -> Result<(ir::Type, ir::InstrKind), BuildError> {
    let (cond, cond_type) = builder.resolve_typed(cond)?;
    let (x, x_type) = builder.resolve_typed(x)?;
    let (y, y_type) = builder.resolve_typed(y)?;

    // A scalar condition may select between whole vectors
    if cond_type != ir::Type::i1() {
        builder.check_type(
            "select condition",
            &x_type.comparison_result(),
            &cond_type,
            source,
        );
    }

    builder.check_type("operands of 'select'", &x_type, &y_type, source);
    Ok((x_type, ir::InstrKind::Select { cond, x, y }))
}
