use anchor_lang::prelude::*;
use anchor_lang::error::{ComparedValues, Error};
use solana_program::hash::hashv;
use static_assertions::const_assert_eq;

pub mod error;
pub mod instructions;
pub mod state;
pub mod events;
pub mod constants;
pub mod math;

pub use error::*;
pub use instructions::*;
pub use state::*;
pub use events::*;
pub use constants::*;
pub use math::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "reserve_ledger",
    project_url: "https://github.com/reserve-ledger/reserve_ledger",
    contacts: "email:security@reserve-ledger.dev",
    policy: "https://github.com/reserve-ledger/reserve_ledger/blob/main/SECURITY.md",
    source_code: "https://github.com/reserve-ledger/reserve_ledger",
    source_release: "v0.1.0"
}

declare_id!("HauGPFbVcmesU4LLLHdeys3ZroGv9zrdSFFK5iZHjFoh");

#[program]
pub mod reserve_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        Initialize::handler(ctx, args)
    }

    // Access registry

    pub fn grant_role(ctx: Context<UpdateRole>, role: Role, holder: Pubkey) -> Result<()> {
        handle_grant_role(ctx, role, holder)
    }

    pub fn revoke_role(ctx: Context<UpdateRole>, role: Role, holder: Pubkey) -> Result<()> {
        handle_revoke_role(ctx, role, holder)
    }

    // Ledger

    pub fn mint(ctx: Context<MintTokens>, to: Pubkey, amount: u128) -> Result<()> {
        MintTokens::handler(ctx, to, amount)
    }

    pub fn burn(ctx: Context<BurnTokens>, from: Pubkey, amount: u128) -> Result<()> {
        BurnTokens::handler(ctx, from, amount)
    }

    pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u128) -> Result<()> {
        TransferTokens::handler(ctx, to, amount)
    }

    pub fn set_issuance_cap(ctx: Context<UpdateLedgerPolicy>, cap: Option<u128>) -> Result<()> {
        handle_set_issuance_cap(ctx, cap)
    }

    pub fn set_allow_list_enabled(ctx: Context<UpdateLedgerPolicy>, enabled: bool) -> Result<()> {
        handle_set_allow_list_enabled(ctx, enabled)
    }

    pub fn add_to_allow_list(ctx: Context<UpdateLedgerPolicy>, holders: Vec<Pubkey>) -> Result<()> {
        handle_add_to_allow_list(ctx, holders)
    }

    pub fn remove_from_allow_list(ctx: Context<UpdateLedgerPolicy>, holder: Pubkey) -> Result<()> {
        handle_remove_from_allow_list(ctx, holder)
    }

    pub fn pause(ctx: Context<UpdateLedgerPolicy>) -> Result<()> {
        handle_set_paused(ctx, true)
    }

    pub fn unpause(ctx: Context<UpdateLedgerPolicy>) -> Result<()> {
        handle_set_paused(ctx, false)
    }

    // Reserve state

    pub fn submit_reserve_update(ctx: Context<SubmitReserveUpdate>, update: ReserveUpdate) -> Result<()> {
        SubmitReserveUpdate::handler(ctx, update)
    }

    pub fn set_ttl(ctx: Context<UpdateReserveConfig>, ttl: u64) -> Result<()> {
        handle_set_ttl(ctx, ttl)
    }

    pub fn set_source_tag(ctx: Context<UpdateReserveConfig>, source_tag: String) -> Result<()> {
        handle_set_source_tag(ctx, source_tag)
    }

    // Request coordinator

    pub fn issue_request(ctx: Context<IssueRequest>, token: [u8; 32]) -> Result<()> {
        IssueRequest::handler(ctx, token)
    }

    pub fn fulfill_request(
        ctx: Context<FulfillRequest>,
        token: [u8; 32],
        response: FetchResponse,
    ) -> Result<()> {
        FulfillRequest::handler(ctx, token, response)
    }

    pub fn set_min_interval(ctx: Context<UpdateCoordinatorConfig>, min_interval: u64) -> Result<()> {
        handle_set_min_interval(ctx, min_interval)
    }

    pub fn set_dispatch_config(ctx: Context<UpdateCoordinatorConfig>, dispatch: DispatchConfig) -> Result<()> {
        handle_set_dispatch_config(ctx, dispatch)
    }

    pub fn set_request_source(ctx: Context<UpdateCoordinatorConfig>, source: String) -> Result<()> {
        handle_set_request_source(ctx, source)
    }

    pub fn set_response_channel(ctx: Context<UpdateCoordinatorConfig>, response_channel: Pubkey) -> Result<()> {
        handle_set_response_channel(ctx, response_channel)
    }

    // Views, returned through return data

    pub fn has_role(ctx: Context<ViewState>, role: Role, holder: Pubkey) -> Result<bool> {
        Ok(ctx.accounts.access_registry.has_role(role, &holder))
    }

    pub fn get_remaining_mintable(ctx: Context<ViewState>) -> Result<u128> {
        Ok(ctx.accounts.ledger.remaining_mintable())
    }

    pub fn get_reserve_snapshot(ctx: Context<ViewState>) -> Result<ReserveSnapshot> {
        let now = Clock::get()?.unix_timestamp;
        Ok(ctx.accounts.reserve_state.snapshot(now))
    }

    pub fn get_freshness(ctx: Context<ViewState>) -> Result<Freshness> {
        let now = Clock::get()?.unix_timestamp;
        Ok(ctx.accounts.reserve_state.freshness(now))
    }

    pub fn get_backing_ratio(ctx: Context<ViewState>) -> Result<BackingRatio> {
        let total_issuance = ctx.accounts.ledger.total_issuance;
        Ok(ctx.accounts.reserve_state.backing_ratio(total_issuance))
    }

    pub fn get_request_window(ctx: Context<ViewState>) -> Result<RequestWindow> {
        let now = Clock::get()?.unix_timestamp;
        Ok(ctx.accounts.coordinator.request_window(now))
    }
}
