use super::*;

/// Shared by `pause` and `unpause`. Transfers are never affected.
pub fn handle_set_paused(ctx: Context<UpdateLedgerPolicy>, paused: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    ctx.accounts
        .ledger
        .set_paused(&ctx.accounts.access_registry, &admin, paused)?;

    msg!("Mint and burn {}", if paused { "paused" } else { "resumed" });

    emit_cpi!(PauseStatusChangedEvent {
        paused,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}
