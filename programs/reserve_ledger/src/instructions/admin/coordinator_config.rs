use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateCoordinatorConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
    )]
    pub coordinator: Box<Account<'info, RequestCoordinator>>,
}

impl UpdateCoordinatorConfig<'_> {
    fn emit_updated(ctx: &Context<UpdateCoordinatorConfig>, config_type: &str) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        msg!("Coordinator {} updated", config_type);

        emit_cpi!(CoordinatorConfigUpdatedEvent {
            config_type: config_type.to_string(),
            updated_by: ctx.accounts.admin.key(),
            timestamp: now,
        });

        Ok(())
    }
}

pub fn handle_set_min_interval(ctx: Context<UpdateCoordinatorConfig>, min_interval: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .coordinator
        .set_min_interval(&ctx.accounts.access_registry, &admin, min_interval)?;

    UpdateCoordinatorConfig::emit_updated(&ctx, "min_interval")
}

pub fn handle_set_dispatch_config(ctx: Context<UpdateCoordinatorConfig>, dispatch: DispatchConfig) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .coordinator
        .set_dispatch_config(&ctx.accounts.access_registry, &admin, dispatch)?;

    UpdateCoordinatorConfig::emit_updated(&ctx, "dispatch")
}

pub fn handle_set_request_source(ctx: Context<UpdateCoordinatorConfig>, source: String) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .coordinator
        .set_source(&ctx.accounts.access_registry, &admin, source)?;

    UpdateCoordinatorConfig::emit_updated(&ctx, "source")
}

pub fn handle_set_response_channel(ctx: Context<UpdateCoordinatorConfig>, response_channel: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .coordinator
        .set_response_channel(&ctx.accounts.access_registry, &admin, response_channel)?;

    UpdateCoordinatorConfig::emit_updated(&ctx, "response_channel")
}
