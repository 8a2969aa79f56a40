use derive_more::{Display, IsVariant};
use diagnostics::{Diagnostic, Severity, Show, write_location};
use source_files::{Source, SourceFiles};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub source: Source,
    pub severity: Severity,
}

impl BuildError {
    pub fn with_severity(self, severity: Severity) -> Self {
        Self { severity, ..self }
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl Show for BuildError {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result {
        write_location(w, self.source, source_files)?;
        write!(w, ": {}: {}", self.severity, self.kind)
    }
}

impl Diagnostic for BuildError {
    fn severity(&self) -> Severity {
        self.severity
    }
}

/// Which namespace a name was looked up or declared in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, IsVariant)]
pub enum SymbolScope {
    #[display("type")]
    Type,
    #[display("global")]
    Global,
    #[display("local")]
    Local,
}

impl SymbolScope {
    pub fn sigil(self) -> char {
        match self {
            SymbolScope::Type | SymbolScope::Local => '%',
            SymbolScope::Global => '@',
        }
    }
}

#[derive(Clone, Debug, IsVariant)]
pub enum BuildErrorKind {
    DuplicateSymbol {
        name: String,
        scope: SymbolScope,
        previous: Source,
    },
    UnknownSymbol {
        name: String,
        scope: SymbolScope,
    },
    UnknownType {
        name: String,
    },
    UnknownPredicate {
        keyword: String,
        is_float: bool,
    },
    OperandTypeMismatch {
        context: String,
        expected: String,
        found: String,
    },
    MalformedBlock {
        block: String,
    },
    UnsupportedConstruct {
        construct: String,
    },
    ExpectedBlock {
        name: String,
    },
    ExpectedValue {
        name: String,
    },
    NotAPointer {
        context: String,
        found: String,
    },
    NotCallable {
        found: String,
    },
    NonIntegerOperand {
        context: String,
        found: String,
    },
    InvalidGetElementPtr {
        reason: String,
    },
    CallArityMismatch {
        callee: String,
        expected: usize,
        found: usize,
        is_variadic: bool,
    },
    DuplicateSwitchCase {
        value: String,
    },
    CyclicTypeDefinition {
        name: String,
    },
    CyclicValue {
        name: String,
    },
    InvalidConstant {
        reason: String,
    },
}

impl BuildErrorKind {
    pub fn at(self, source: Source) -> BuildError {
        BuildError {
            kind: self,
            source,
            severity: Severity::Error,
        }
    }
}

impl Display for BuildErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildErrorKind::DuplicateSymbol {
                name,
                scope,
                previous,
            } => write!(
                f,
                "Duplicate {} symbol '{}{}', previously declared at {}",
                scope,
                scope.sigil(),
                name,
                previous.location
            ),
            BuildErrorKind::UnknownSymbol { name, scope } => {
                write!(f, "Undeclared {} symbol '{}{}'", scope, scope.sigil(), name)
            }
            BuildErrorKind::UnknownType { name } => write!(f, "Undeclared type '%{}'", name),
            BuildErrorKind::UnknownPredicate { keyword, is_float } => write!(
                f,
                "Unknown {} comparison predicate '{}'",
                if *is_float { "floating-point" } else { "integer" },
                keyword
            ),
            BuildErrorKind::OperandTypeMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "Mismatching types for {}, expected '{}' but got '{}'",
                context, expected, found
            ),
            BuildErrorKind::MalformedBlock { block } => {
                write!(f, "Basic block '%{}' is missing a terminator", block)
            }
            BuildErrorKind::UnsupportedConstruct { construct } => {
                write!(f, "Unsupported construct '{}'", construct)
            }
            BuildErrorKind::ExpectedBlock { name } => {
                write!(f, "Expected '%{}' to be a basic block", name)
            }
            BuildErrorKind::ExpectedValue { name } => {
                write!(f, "Basic block '%{}' cannot be used as a value", name)
            }
            BuildErrorKind::NotAPointer { context, found } => {
                write!(f, "Expected pointer for {}, got '{}'", context, found)
            }
            BuildErrorKind::NotCallable { found } => {
                write!(f, "Cannot call value of type '{}'", found)
            }
            BuildErrorKind::NonIntegerOperand { context, found } => {
                write!(f, "Expected integer for {}, got '{}'", context, found)
            }
            BuildErrorKind::InvalidGetElementPtr { reason } => {
                write!(f, "Invalid getelementptr, {}", reason)
            }
            BuildErrorKind::CallArityMismatch {
                callee,
                expected,
                found,
                is_variadic,
            } => write!(
                f,
                "Function '{}' expects {}{} argument{}, got {}",
                callee,
                if *is_variadic { "at least " } else { "" },
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            BuildErrorKind::DuplicateSwitchCase { value } => {
                write!(f, "Duplicate switch case '{}'", value)
            }
            BuildErrorKind::CyclicTypeDefinition { name } => {
                write!(f, "Type '%{}' is defined in terms of itself", name)
            }
            BuildErrorKind::CyclicValue { name } => {
                write!(f, "Value '%{}' depends on itself", name)
            }
            BuildErrorKind::InvalidConstant { reason } => {
                write!(f, "Invalid constant, {}", reason)
            }
        }
    }
}
