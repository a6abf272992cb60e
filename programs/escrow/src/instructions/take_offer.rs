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
pub struct TakeOffer<'info> {
    /// The taker accepting the terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The maker who created the offer
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Offer record; closed on settlement, rent back to the maker who paid
    /// for it
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = offered_mint @ EscrowError::InvalidOfferedMint,
        has_one = wanted_mint @ EscrowError::InvalidWantedMint,
        seeds = [OFFER_SEED, offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Box<Account<'info, Offer>>,

    pub offered_mint: Box<Account<'info, Mint>>,

    pub wanted_mint: Box<Account<'info, Mint>>,

    /// Vault holding the offered tokens, owned by the offer record
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's account for the offered mint (receives the vault contents)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = offered_mint,
        associated_token::authority = taker,
    )]
    pub taker_offered_ata: Box<Account<'info, TokenAccount>>,

    /// Taker's account for the wanted mint (source of the payment)
    #[account(
        mut,
        associated_token::mint = wanted_mint,
        associated_token::authority = taker,
    )]
    pub taker_wanted_ata: Box<Account<'info, TokenAccount>>,

    /// Maker's account for the wanted mint (receives the payment)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = wanted_mint,
        associated_token::authority = maker,
    )]
    pub maker_wanted_ata: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> TakeOffer<'info> {
    /// Pay the maker the wanted amount
    pub fn pay_maker(&mut self) -> Result<()> {
        transfer_tokens(
            &self.taker_wanted_ata,
            &self.maker_wanted_ata,
            self.offer.wanted_amount,
            &self.wanted_mint,
            self.taker.to_account_info(),
            &self.token_program,
            None,
        )
    }

    /// Hand the full vault balance to the taker, then close the vault with
    /// its rent going to the taker. The offer record signs both calls with
    /// its stored bump.
    pub fn release_vault_to_taker(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            &self.offer.id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        transfer_tokens(
            &self.vault,
            &self.taker_offered_ata,
            self.vault.amount,
            &self.offered_mint,
            self.offer.to_account_info(),
            &self.token_program,
            Some(signer_seeds),
        )?;

        close_token_account(
            &self.vault,
            self.taker.to_account_info(),
            self.offer.to_account_info(),
            &self.token_program,
            signer_seeds,
        )
    }
}

/// Handler for the take_offer instruction. Both legs of the swap run inside
/// one transaction, so a failure in either leaves every balance untouched.
pub fn handler(ctx: Context<TakeOffer>) -> Result<()> {
    ctx.accounts.pay_maker()?;
    ctx.accounts.release_vault_to_taker()?;

    msg!("offer {} settled", ctx.accounts.offer.id);
    Ok(())
}
