use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Role {
    Admin,     // Grants and revokes every role, owns all policy knobs
    Issuer,    // May mint
    Redeemer,  // May burn
    Attestor,  // May commit reserve updates
    Requester, // May issue fetch requests
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RoleGrant {
    pub role: Role,
    pub holder: Pubkey,
    pub granted_at: i64,
}

/// Flat role -> holder mapping consulted at the start of every mutating operation.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct AccessRegistry {
    pub bump: u8,
    #[max_len(32)]
    pub grants: Vec<RoleGrant>,
}

impl AccessRegistry {
    pub fn initialize(&mut self, bump: u8, admin: Pubkey, now: i64) -> Result<()> {
        require_keys_neq!(admin, Pubkey::default(), ReserveLedgerError::ZeroAddress);

        self.bump = bump;
        self.grants = vec![RoleGrant {
            role: Role::Admin,
            holder: admin,
            granted_at: now,
        }];
        Ok(())
    }

    pub fn has_role(&self, role: Role, holder: &Pubkey) -> bool {
        self.grants
            .iter()
            .any(|grant| grant.role == role && grant.holder == *holder)
    }

    pub fn require_role(&self, role: Role, holder: &Pubkey) -> Result<()> {
        require!(self.has_role(role, holder), ReserveLedgerError::Unauthorized);
        Ok(())
    }

    pub fn holders(&self, role: Role) -> impl Iterator<Item = &Pubkey> + '_ {
        self.grants
            .iter()
            .filter(move |grant| grant.role == role)
            .map(|grant| &grant.holder)
    }

    pub fn holder_count(&self, role: Role) -> usize {
        self.holders(role).count()
    }

    /// Returns `false` when the holder already had the role.
    pub fn grant(&mut self, caller: &Pubkey, role: Role, holder: Pubkey, now: i64) -> Result<bool> {
        self.require_role(Role::Admin, caller)?;
        require_keys_neq!(holder, Pubkey::default(), ReserveLedgerError::ZeroAddress);

        if self.has_role(role, &holder) {
            return Ok(false);
        }
        require!(
            self.grants.len() < MAX_ROLE_GRANTS,
            ReserveLedgerError::MaxRoleGrantsReached
        );

        self.grants.push(RoleGrant {
            role,
            holder,
            granted_at: now,
        });
        Ok(true)
    }

    /// Returns `false` when the holder did not have the role.
    ///
    /// Revoking the last admin is allowed and leaves the registry without
    /// anyone able to grant again.
    pub fn revoke(&mut self, caller: &Pubkey, role: Role, holder: Pubkey) -> Result<bool> {
        self.require_role(Role::Admin, caller)?;

        let before = self.grants.len();
        self.grants
            .retain(|grant| !(grant.role == role && grant.holder == holder));
        Ok(self.grants.len() != before)
    }
}
