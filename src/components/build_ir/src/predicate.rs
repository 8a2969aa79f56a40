use crate::{BuildError, BuildErrorKind};
use primitives::{FloatPred, IntPred, UnknownPredicate};
use source_files::Source;

pub fn resolve_int_pred(keyword: &str, source: Source) -> Result<IntPred, BuildError> {
    keyword.parse().map_err(|UnknownPredicate(keyword)| {
        BuildErrorKind::UnknownPredicate {
            keyword,
            is_float: false,
        }
        .at(source)
    })
}

pub fn resolve_float_pred(keyword: &str, source: Source) -> Result<FloatPred, BuildError> {
    keyword.parse().map_err(|UnknownPredicate(keyword)| {
        BuildErrorKind::UnknownPredicate {
            keyword,
            is_float: true,
        }
        .at(source)
    })
}
