use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(from: Pubkey)]
pub struct BurnTokens<'info> {
    pub redeemer: Signer<'info>,

    #[account(
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, from.as_ref()],
        bump = holder_account.bump,
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,
}

impl BurnTokens<'_> {
    pub fn handler(ctx: Context<BurnTokens>, from: Pubkey, amount: u128) -> Result<()> {
        let clock = Clock::get()?;
        let redeemer = ctx.accounts.redeemer.key();

        let ledger = &mut ctx.accounts.ledger;
        let audit_id = ledger.burn(
            &ctx.accounts.access_registry,
            &redeemer,
            &mut ctx.accounts.holder_account,
            amount,
        )?;
        let total_issuance = ledger.total_issuance;

        emit_cpi!(TokensBurnedEvent {
            audit_id,
            redeemer,
            from,
            amount,
            total_issuance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
