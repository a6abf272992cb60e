use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Offered and wanted token mints must be different")]
    IdenticalMints,
    #[msg("Signer is not the maker of this offer")]
    NotOfferMaker,
    #[msg("Offered mint does not match the offer")]
    InvalidOfferedMint,
    #[msg("Wanted mint does not match the offer")]
    InvalidWantedMint,
}
