use derive_more::Display;
use std::str::FromStr;

/// Integer comparison condition codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum IntPred {
    #[display("eq")]
    Eq,
    #[display("ne")]
    Ne,
    #[display("ugt")]
    Ugt,
    #[display("uge")]
    Uge,
    #[display("ult")]
    Ult,
    #[display("ule")]
    Ule,
    #[display("sgt")]
    Sgt,
    #[display("sge")]
    Sge,
    #[display("slt")]
    Slt,
    #[display("sle")]
    Sle,
}

impl IntPred {
    pub const ALL: [Self; 10] = [
        Self::Eq,
        Self::Ne,
        Self::Ugt,
        Self::Uge,
        Self::Ult,
        Self::Ule,
        Self::Sgt,
        Self::Sge,
        Self::Slt,
        Self::Sle,
    ];
}

/// Floating-point comparison condition codes.
///
/// `o` prefixed predicates are false when either operand is NaN, `u`
/// prefixed ones are true. `false` and `true` ignore their operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum FloatPred {
    #[display("false")]
    False,
    #[display("oeq")]
    Oeq,
    #[display("ogt")]
    Ogt,
    #[display("oge")]
    Oge,
    #[display("olt")]
    Olt,
    #[display("ole")]
    Ole,
    #[display("one")]
    One,
    #[display("ord")]
    Ord,
    #[display("ueq")]
    Ueq,
    #[display("ugt")]
    Ugt,
    #[display("uge")]
    Uge,
    #[display("ult")]
    Ult,
    #[display("ule")]
    Ule,
    #[display("une")]
    Une,
    #[display("uno")]
    Uno,
    #[display("true")]
    True,
}

impl FloatPred {
    pub const ALL: [Self; 16] = [
        Self::False,
        Self::Oeq,
        Self::Ogt,
        Self::Oge,
        Self::Olt,
        Self::Ole,
        Self::One,
        Self::Ord,
        Self::Ueq,
        Self::Ugt,
        Self::Uge,
        Self::Ult,
        Self::Ule,
        Self::Une,
        Self::Uno,
        Self::True,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPredicate(pub String);

impl FromStr for IntPred {
    type Err = UnknownPredicate;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pred| pred.to_string() == keyword)
            .ok_or_else(|| UnknownPredicate(keyword.into()))
    }
}

impl FromStr for FloatPred {
    type Err = UnknownPredicate;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pred| pred.to_string() == keyword)
            .ok_or_else(|| UnknownPredicate(keyword.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predicates() {
        assert_eq!("sle".parse(), Ok(IntPred::Sle));
        assert_eq!("uno".parse(), Ok(FloatPred::Uno));
        assert_eq!("true".parse(), Ok(FloatPred::True));
        assert_eq!(
            "oeq".parse::<IntPred>(),
            Err(UnknownPredicate("oeq".into()))
        );
    }

    #[test]
    fn test_keywords_are_distinct() {
        for (i, a) in FloatPred::ALL.iter().enumerate() {
            for b in &FloatPred::ALL[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
