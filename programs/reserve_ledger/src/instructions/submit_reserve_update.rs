use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SubmitReserveUpdate<'info> {
    pub attestor: Signer<'info>,

    #[account(
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        seeds = [RESERVE_STATE_SEED],
        bump = reserve_state.bump,
    )]
    pub reserve_state: Box<Account<'info, ReserveState>>,
}

impl SubmitReserveUpdate<'_> {
    pub fn handler(ctx: Context<SubmitReserveUpdate>, update: ReserveUpdate) -> Result<()> {
        let clock = Clock::get()?;
        let attestor = ctx.accounts.attestor.key();

        ctx.accounts.reserve_state.accept_update(
            &ctx.accounts.access_registry,
            &attestor,
            &update,
            clock.unix_timestamp,
        )?;

        emit_cpi!(ReserveUpdatedEvent::committed(
            &ctx.accounts.reserve_state,
            clock.unix_timestamp
        ));

        Ok(())
    }
}
