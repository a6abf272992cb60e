use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("22222222222222222222222222222222222222222222");

#[program]
pub mod escrow {
    use super::*;

    /// Create a new offer: maker deposits the offered tokens into a vault
    /// and records the terms of the trade
    pub fn make_offer(
        ctx: Context<MakeOffer>,
        id: u64,
        offered_amount: u64,
        wanted_amount: u64,
    ) -> Result<()> {
        instructions::make_offer::handler(ctx, id, offered_amount, wanted_amount)
    }

    /// Accept an open offer: taker pays the wanted tokens to the maker and
    /// receives the vault's contents
    pub fn take_offer(ctx: Context<TakeOffer>) -> Result<()> {
        instructions::take_offer::handler(ctx)
    }

    /// Cancel an open offer: maker reclaims the deposited tokens
    pub fn cancel_offer(ctx: Context<CancelOffer>) -> Result<()> {
        instructions::cancel_offer::handler(ctx)
    }
}
