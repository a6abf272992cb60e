use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, TransferChecked};

/// Move `amount` of `mint` between token accounts. Vault withdrawals pass
/// the offer PDA's seeds as `signer_seeds`; maker/taker transfers pass None
/// and rely on their transaction signature.
pub fn transfer_tokens<'info>(
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    amount: u64,
    mint: &Account<'info, Mint>,
    authority: AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority,
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds),
        None => CpiContext::new(cpi_program, cpi_accounts),
    };

    token::transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Close an emptied token account, sending its rent lamports to
/// `destination`. The token program rejects the close while a balance
/// remains, so the vault must be drained first.
pub fn close_token_account<'info>(
    account: &Account<'info, TokenAccount>,
    destination: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = CloseAccount {
        account: account.to_account_info(),
        destination,
        authority,
    };
    let cpi_ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds);

    token::close_account(cpi_ctx)
}
