use diagnostics::Severity;
use std::num::NonZero;

#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Severity of operands whose types disagree, such as the two sides of
    /// a binary operator. Resolution continues either way.
    pub operand_type_mismatch: Severity,

    /// Severity of a `load` whose declared element type is not the pointee
    /// type of its pointer operand.
    pub load_element_mismatch: Severity,

    /// Whether call arguments are checked against the callee's signature.
    pub check_call_signatures: bool,

    /// Resolve function bodies on a thread pool. The result is identical to
    /// resolving them one after another.
    pub parallel_bodies: bool,

    pub available_parallelism: NonZero<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            operand_type_mismatch: Severity::Error,
            load_element_mismatch: Severity::Error,
            check_call_signatures: true,
            parallel_bodies: false,
            available_parallelism: NonZero::new(num_cpus::get()).unwrap_or(NonZero::<usize>::MIN),
        }
    }
}
