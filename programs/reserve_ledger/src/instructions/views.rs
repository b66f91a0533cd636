use super::*;

/// Read-only access to every singleton; views return through Anchor return data.
#[derive(Accounts)]
pub struct ViewState<'info> {
    #[account(
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        seeds = [RESERVE_STATE_SEED],
        bump = reserve_state.bump,
    )]
    pub reserve_state: Box<Account<'info, ReserveState>>,

    #[account(
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
    )]
    pub coordinator: Box<Account<'info, RequestCoordinator>>,
}
