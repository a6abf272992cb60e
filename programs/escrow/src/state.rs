use anchor_lang::prelude::*;

/// Terms of one in-flight trade. Lives at a PDA derived from the offer id
/// and owns the vault that custodies the offered tokens until a taker
/// settles or the maker cancels.
#[account]
#[derive(InitSpace)]
pub struct Offer {
    /// Caller-chosen identifier, part of the PDA seed
    pub id: u64,
    /// Creator of the offer and its only cancel authority
    pub maker: Pubkey,
    /// Mint deposited into the vault
    pub offered_mint: Pubkey,
    /// Mint the maker wants in return
    pub wanted_mint: Pubkey,
    /// Amount of the wanted mint required to settle
    pub wanted_amount: u64,
    /// PDA bump, cached so later instructions can sign without a search
    pub bump: u8,
}
