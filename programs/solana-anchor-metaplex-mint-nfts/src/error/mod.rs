use anchor_lang::prelude::*;

#[error_code]
pub enum MintNftError {
    // ========== ACCOUNT VALIDATION ERRORS ==========
    #[msg("Account is not owned by the expected program")]
    NotOwner,

    #[msg("Required signature is missing")]
    MissingSigner,

    #[msg("Account address does not match its derived address")]
    AddressMismatch,

    #[msg("Account already initialized")]
    AlreadyInitialized,

    #[msg("Program is already configured")]
    AlreadyConfigured,

    // ========== ISSUANCE ERRORS ==========
    #[msg("Metadata field exceeds its byte limit")]
    FieldTooLong,

    #[msg("Metadata account already exists")]
    MetadataAlreadyExists,

    #[msg("NFT has not been issued")]
    NotIssued,

    #[msg("Program is not in the configured state")]
    NotConfigured,

    #[msg("Invalid token supply for NFT")]
    InvalidTokenSupply,

    #[msg("Mint authority is still held by the program")]
    MintAuthorityNotRevoked,

    // ========== RESOURCE ERRORS ==========
    #[msg("No bump seed produced a valid program address")]
    AddressDerivationExhausted,
}
