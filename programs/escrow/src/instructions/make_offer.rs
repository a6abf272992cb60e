use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::{ANCHOR_DISCRIMINATOR, OFFER_SEED};
use crate::errors::EscrowError;
use crate::instructions::shared::transfer_tokens;
use crate::state::Offer;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct MakeOffer<'info> {
    /// The maker who sets the terms and funds the vault
    #[account(mut)]
    pub maker: Signer<'info>,

    /// The mint the maker is depositing
    pub offered_mint: Account<'info, Mint>,

    /// The mint the maker wants in return
    pub wanted_mint: Account<'info, Mint>,

    /// Maker's token account for the offered mint (source of the deposit)
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = maker,
    )]
    pub maker_offered_ata: Account<'info, TokenAccount>,

    /// Offer record, created at the PDA derived from the id. `init` fails
    /// if the id is already in use.
    #[account(
        init,
        payer = maker,
        space = ANCHOR_DISCRIMINATOR + Offer::INIT_SPACE,
        seeds = [OFFER_SEED, id.to_le_bytes().as_ref()],
        bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Vault owned by the offer record; holds the deposit until settlement
    #[account(
        init,
        payer = maker,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeOffer<'info> {
    /// Record the terms of the trade
    pub fn save_offer(&mut self, id: u64, wanted_amount: u64, bumps: &MakeOfferBumps) -> Result<()> {
        self.offer.set_inner(Offer {
            id,
            maker: self.maker.key(),
            offered_mint: self.offered_mint.key(),
            wanted_mint: self.wanted_mint.key(),
            wanted_amount,
            bump: bumps.offer,
        });
        Ok(())
    }

    /// Move the offered tokens from the maker into the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        transfer_tokens(
            &self.maker_offered_ata,
            &self.vault,
            amount,
            &self.offered_mint,
            self.maker.to_account_info(),
            &self.token_program,
            None,
        )
    }
}

/// Handler for the make_offer instruction
pub fn handler(
    ctx: Context<MakeOffer>,
    id: u64,
    offered_amount: u64,
    wanted_amount: u64,
) -> Result<()> {
    // All argument checks happen before any token movement
    require_gt!(offered_amount, 0, EscrowError::InvalidAmount);
    require_gt!(wanted_amount, 0, EscrowError::InvalidAmount);
    require_keys_neq!(
        ctx.accounts.offered_mint.key(),
        ctx.accounts.wanted_mint.key(),
        EscrowError::IdenticalMints
    );

    ctx.accounts.save_offer(id, wanted_amount, &ctx.bumps)?;
    ctx.accounts.deposit(offered_amount)?;

    msg!("offer {} open", id);
    Ok(())
}
