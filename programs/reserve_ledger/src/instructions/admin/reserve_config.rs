use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateReserveConfig<'info> {
    pub admin: Signer<'info>,

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

pub fn handle_set_ttl(ctx: Context<UpdateReserveConfig>, ttl: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let reserve_state = &mut ctx.accounts.reserve_state;
    reserve_state.set_ttl(&ctx.accounts.access_registry, &admin, ttl)?;
    let source_tag = reserve_state.source_tag.clone();

    emit_cpi!(ReserveConfigUpdatedEvent {
        ttl,
        source_tag,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_set_source_tag(ctx: Context<UpdateReserveConfig>, source_tag: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let reserve_state = &mut ctx.accounts.reserve_state;
    reserve_state.set_source_tag(&ctx.accounts.access_registry, &admin, source_tag.clone())?;
    let ttl = reserve_state.ttl;

    emit_cpi!(ReserveConfigUpdatedEvent {
        ttl,
        source_tag,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}
