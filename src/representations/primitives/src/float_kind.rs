use derive_more::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum FloatKind {
    #[display("half")]
    Half,
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("x86_fp80")]
    X86Fp80,
    #[display("fp128")]
    Fp128,
    #[display("ppc_fp128")]
    PpcFp128,
}

impl FloatKind {
    pub fn bits(self) -> u32 {
        match self {
            Self::Half => 16,
            Self::Float => 32,
            Self::Double => 64,
            Self::X86Fp80 => 80,
            Self::Fp128 | Self::PpcFp128 => 128,
        }
    }
}
