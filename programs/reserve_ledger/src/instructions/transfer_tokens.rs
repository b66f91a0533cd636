use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump = from_account.bump,
    )]
    pub from_account: Box<Account<'info, HolderAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub to_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

impl TransferTokens<'_> {
    pub fn handler(mut ctx: Context<TransferTokens>, to: Pubkey, amount: u128) -> Result<()> {
        let clock = Clock::get()?;
        let owner = ctx.accounts.owner.key();
        require_keys_neq!(owner, to, ReserveLedgerError::SelfTransfer);

        let accounts = &mut ctx.accounts;
        accounts.to_account.bind(to, ctx.bumps.to_account);

        let audit_id = accounts.ledger.transfer(
            &owner,
            &mut accounts.from_account,
            &mut accounts.to_account,
            amount,
        )?;

        emit_cpi!(TokensTransferredEvent {
            audit_id,
            from: owner,
            to,
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
