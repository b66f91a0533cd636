use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    pub cap: Option<u128>,          // None for unlimited issuance
    pub ttl: u64,                   // Seconds a reserve figure stays acceptable
    pub source_tag: String,
    pub min_interval: u64,          // Seconds between successful fetches
    pub response_channel: Pubkey,   // Fetch agent identity allowed to fulfill
    pub dispatch: DispatchConfig,
    pub source: String,
}

#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        constraint = is_deployer(&authority.key()) @ ReserveLedgerError::UnauthorizedDeployer,
    )]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + AccessRegistry::INIT_SPACE,
        seeds = [ACCESS_REGISTRY_SEED],
        bump
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        payer = authority,
        space = 8 + ReserveState::INIT_SPACE,
        seeds = [RESERVE_STATE_SEED],
        bump
    )]
    pub reserve_state: Box<Account<'info, ReserveState>>,

    #[account(
        init,
        payer = authority,
        space = 8 + RequestCoordinator::INIT_SPACE,
        seeds = [COORDINATOR_SEED],
        bump
    )]
    pub coordinator: Box<Account<'info, RequestCoordinator>>,

    pub system_program: Program<'info, System>,
}

impl Initialize<'_> {
    pub fn handler(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;
        let authority = ctx.accounts.authority.key();
        let coordinator_key = ctx.accounts.coordinator.key();

        let access_registry = &mut ctx.accounts.access_registry;
        access_registry.initialize(ctx.bumps.access_registry, authority, now)?;
        // The coordinator forwards fetched figures into the reserve state itself.
        access_registry.grant(&authority, Role::Attestor, coordinator_key, now)?;

        ctx.accounts.ledger.initialize(ctx.bumps.ledger, args.cap);

        ctx.accounts
            .reserve_state
            .initialize(ctx.bumps.reserve_state, args.ttl, args.source_tag)?;

        ctx.accounts.coordinator.initialize(
            ctx.bumps.coordinator,
            args.min_interval,
            args.response_channel,
            args.dispatch,
            args.source,
        )?;

        msg!("Reserve ledger initialized by {}", authority);

        emit_cpi!(ProgramInitializedEvent {
            authority,
            access_registry: ctx.accounts.access_registry.key(),
            ledger: ctx.accounts.ledger.key(),
            reserve_state: ctx.accounts.reserve_state.key(),
            coordinator: coordinator_key,
            cap: args.cap,
            ttl: args.ttl,
            min_interval: args.min_interval,
            response_channel: args.response_channel,
            timestamp: now,
        });

        Ok(())
    }
}
