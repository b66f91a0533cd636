use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateRole<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,
}

pub fn handle_grant_role(ctx: Context<UpdateRole>, role: Role, holder: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let granted = ctx
        .accounts
        .access_registry
        .grant(&admin, role, holder, now)?;
    if !granted {
        msg!("{:?} already held by {}", role, holder);
        return Ok(());
    }

    emit_cpi!(RoleGrantedEvent {
        role,
        holder,
        granted_by: admin,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_revoke_role(ctx: Context<UpdateRole>, role: Role, holder: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let access_registry = &mut ctx.accounts.access_registry;
    let revoked = access_registry.revoke(&admin, role, holder)?;
    if !revoked {
        msg!("{:?} not held by {}", role, holder);
        return Ok(());
    }

    let remaining_admins = access_registry.holder_count(Role::Admin) as u8;
    if remaining_admins == 0 {
        msg!("Last admin revoked, registry can no longer be administered");
    }

    emit_cpi!(RoleRevokedEvent {
        role,
        holder,
        revoked_by: admin,
        remaining_admins,
        timestamp: now,
    });

    Ok(())
}
