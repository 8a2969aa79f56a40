use derive_more::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum ConversionOp {
    #[display("trunc")]
    Trunc,
    #[display("zext")]
    ZExt,
    #[display("sext")]
    SExt,
    #[display("fptrunc")]
    FPTrunc,
    #[display("fpext")]
    FPExt,
    #[display("fptoui")]
    FPToUI,
    #[display("fptosi")]
    FPToSI,
    #[display("uitofp")]
    UIToFP,
    #[display("sitofp")]
    SIToFP,
    #[display("ptrtoint")]
    PtrToInt,
    #[display("inttoptr")]
    IntToPtr,
    #[display("bitcast")]
    BitCast,
    #[display("addrspacecast")]
    AddrSpaceCast,
}
