use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(token: [u8; 32])]
pub struct IssueRequest<'info> {
    #[account(mut)]
    pub requester: Signer<'info>,

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

    /// Keyed by the correlation token the client derived from `current_sequence`.
    #[account(
        init,
        payer = requester,
        space = 8 + OutstandingRequest::INIT_SPACE,
        seeds = [REQUEST_SEED, coordinator.key().as_ref(), token.as_ref()],
        bump
    )]
    pub request: Box<Account<'info, OutstandingRequest>>,

    pub system_program: Program<'info, System>,
}

impl IssueRequest<'_> {
    pub fn handler(ctx: Context<IssueRequest>, token: [u8; 32]) -> Result<()> {
        let clock = Clock::get()?;
        let requester = ctx.accounts.requester.key();
        let coordinator_key = ctx.accounts.coordinator.key();

        let coordinator = &mut ctx.accounts.coordinator;
        let record = coordinator.issue_request(
            &ctx.accounts.access_registry,
            &requester,
            &coordinator_key,
            clock.unix_timestamp,
        )?;
        require!(record.token == token, ReserveLedgerError::InvalidRequestToken);

        let dispatch = coordinator.dispatch;
        let source = coordinator.source.clone();
        let sequence = record.sequence;

        ctx.accounts.request.set_inner(OutstandingRequest {
            bump: ctx.bumps.request,
            ..record
        });

        msg!("Request {} issued by {}", sequence, requester);

        emit_cpi!(RequestIssuedEvent {
            token,
            sequence,
            requester,
            subscription_id: dispatch.subscription_id,
            callback_gas_limit: dispatch.callback_gas_limit,
            don_id: dispatch.don_id,
            source,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
