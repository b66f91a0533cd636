use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateLedgerPolicy<'info> {
    pub admin: Signer<'info>,

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
}

pub fn handle_set_issuance_cap(ctx: Context<UpdateLedgerPolicy>, cap: Option<u128>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let ledger = &mut ctx.accounts.ledger;
    let old_cap = ledger.cap;
    ledger.set_cap(&ctx.accounts.access_registry, &admin, cap)?;
    let total_issuance = ledger.total_issuance;

    if matches!(cap, Some(cap) if cap < total_issuance) {
        msg!("Cap set below current issuance {}, minting halted until burns catch up", total_issuance);
    }

    emit_cpi!(IssuanceCapUpdatedEvent {
        old_cap,
        new_cap: cap,
        total_issuance,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_set_allow_list_enabled(ctx: Context<UpdateLedgerPolicy>, enabled: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    ctx.accounts
        .ledger
        .set_allow_list_enabled(&ctx.accounts.access_registry, &admin, enabled)?;

    emit_cpi!(AllowListToggledEvent {
        enabled,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_add_to_allow_list(ctx: Context<UpdateLedgerPolicy>, holders: Vec<Pubkey>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let ledger = &mut ctx.accounts.ledger;
    let added = ledger.add_to_allow_list(&ctx.accounts.access_registry, &admin, &holders)?;
    let list_len = ledger.allow_list.len() as u32;

    emit_cpi!(AllowListUpdatedEvent {
        holders,
        added: true,
        changed: added as u32,
        list_len,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_remove_from_allow_list(ctx: Context<UpdateLedgerPolicy>, holder: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let ledger = &mut ctx.accounts.ledger;
    let removed = ledger.remove_from_allow_list(&ctx.accounts.access_registry, &admin, &holder)?;
    let list_len = ledger.allow_list.len() as u32;

    emit_cpi!(AllowListUpdatedEvent {
        holders: vec![holder],
        added: false,
        changed: u32::from(removed),
        list_len,
        updated_by: admin,
        timestamp: now,
    });

    Ok(())
}
