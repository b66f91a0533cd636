use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintTokens<'info> {
    #[account(mut)]
    pub issuer: Signer<'info>,

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
        init_if_needed,
        payer = issuer,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

impl MintTokens<'_> {
    pub fn handler(ctx: Context<MintTokens>, to: Pubkey, amount: u128) -> Result<()> {
        let clock = Clock::get()?;
        let issuer = ctx.accounts.issuer.key();

        let holder_account = &mut ctx.accounts.holder_account;
        holder_account.bind(to, ctx.bumps.holder_account);

        let ledger = &mut ctx.accounts.ledger;
        let audit_id = ledger.mint(&ctx.accounts.access_registry, &issuer, holder_account, amount)?;
        let total_issuance = ledger.total_issuance;

        emit_cpi!(TokensMintedEvent {
            audit_id,
            issuer,
            to,
            amount,
            total_issuance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
