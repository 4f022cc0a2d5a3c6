use anchor_lang::prelude::*;

#[error_code]
pub enum CustomError {
    #[msg("Account has already been initialized.")]
    AlreadyInitialized,
    #[msg("Referenced account does not exist.")]
    AccountNotFound,
    #[msg("Signer does not match the account authority.")]
    Unauthorized,
    #[msg("Project has not been admitted to a pool.")]
    NotInPool,
    #[msg("Project already belongs to a pool.")]
    AlreadyInPool,
    #[msg("Escrow balance cannot cover the transfer.")]
    InsufficientEscrowBalance,
    #[msg("Math operation overflow.")]
    ArithmeticOverflow,
    #[msg("Seeds do not result in a valid address.")]
    InvalidAddressDerivation,
    #[msg("No escrow exists for this authority.")]
    MissingEscrow,
    #[msg("Escrow is already bound to a pool.")]
    EscrowAlreadyBound,
    #[msg("Pool does not match the account's recorded reference.")]
    PoolMismatch,
    #[msg("Pool membership list is full.")]
    PoolFull,
    #[msg("Project name exceeds the maximum length.")]
    NameTooLong,
    #[msg("Contribution amount must be greater than zero.")]
    ZeroContribution,
    #[msg("Flag override would desynchronize membership records.")]
    MembershipDesync,
}
