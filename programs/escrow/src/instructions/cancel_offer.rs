use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::OFFER_SEED;
use crate::errors::EscrowError;
use crate::instructions::shared::{close_token_account, transfer_tokens};
use crate::state::Offer;

#[derive(Accounts)]
pub struct CancelOffer<'info> {
    /// The maker reclaiming their deposit; must match the recorded maker
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Offer record; closed on cancel, rent back to the maker
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::NotOfferMaker,
        has_one = offered_mint @ EscrowError::InvalidOfferedMint,
        seeds = [OFFER_SEED, offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    pub offered_mint: Account<'info, Mint>,

    /// Vault holding the offered tokens, owned by the offer record
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's account for the offered mint (receives the refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = offered_mint,
        associated_token::authority = maker,
    )]
    pub maker_offered_ata: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CancelOffer<'info> {
    /// Return the full vault balance to the maker, then close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            &self.offer.id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        transfer_tokens(
            &self.vault,
            &self.maker_offered_ata,
            self.vault.amount,
            &self.offered_mint,
            self.offer.to_account_info(),
            &self.token_program,
            Some(signer_seeds),
        )?;

        close_token_account(
            &self.vault,
            self.maker.to_account_info(),
            self.offer.to_account_info(),
            &self.token_program,
            signer_seeds,
        )
    }
}

/// Handler for the cancel_offer instruction
pub fn handler(ctx: Context<CancelOffer>) -> Result<()> {
    ctx.accounts.refund_and_close_vault()?;

    msg!("offer {} cancelled", ctx.accounts.offer.id);
    Ok(())
}
