use super::*;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Ledger {
    pub bump: u8,
    pub total_issuance: u128,       // Sum of every HolderAccount balance, 18 decimals
    pub cap: Option<u128>,          // None means unlimited
    pub paused: bool,               // Gates mint and burn only
    pub allow_list_enabled: bool,
    #[max_len(64)]
    pub allow_list: Vec<Pubkey>,
    pub audit_counter: u64,         // Id of the last mint/burn/transfer audit event
}

/// Per-holder balance. Created on first credit, zeroed but never closed.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct HolderAccount {
    pub holder: Pubkey,
    pub balance: u128,
    pub bump: u8,
}

impl HolderAccount {
    /// Binds a freshly created account to its holder; no-op on an existing one.
    pub fn bind(&mut self, holder: Pubkey, bump: u8) {
        if self.holder == Pubkey::default() {
            self.holder = holder;
            self.bump = bump;
        }
    }
}

impl Ledger {
    pub fn initialize(&mut self, bump: u8, cap: Option<u128>) {
        self.bump = bump;
        self.total_issuance = 0;
        self.cap = cap;
        self.paused = false;
        self.allow_list_enabled = false;
        self.allow_list = Vec::new();
        self.audit_counter = 0;
    }

    /// Credits `to` and returns the audit id of the mint.
    pub fn mint(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        to: &mut HolderAccount,
        amount: u128,
    ) -> Result<u64> {
        registry.require_role(Role::Issuer, caller)?;
        require!(!self.paused, ReserveLedgerError::LedgerPaused);
        require_keys_neq!(to.holder, Pubkey::default(), ReserveLedgerError::ZeroAddress);
        require!(amount > 0, ReserveLedgerError::InvalidAmount);

        let new_total = self.total_issuance.safe_add(amount)?;
        if let Some(cap) = self.cap {
            require!(new_total <= cap, ReserveLedgerError::IssuanceCapExceeded);
        }
        if self.allow_list_enabled {
            require!(self.is_allow_listed(&to.holder), ReserveLedgerError::NotAllowListed);
        }

        let new_balance = to.balance.safe_add(amount)?;
        let audit_id = self.audit_counter.safe_add(1)?;

        to.balance = new_balance;
        self.total_issuance = new_total;
        self.audit_counter = audit_id;
        Ok(audit_id)
    }

    /// Debits `from` and returns the audit id of the burn.
    pub fn burn(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        from: &mut HolderAccount,
        amount: u128,
    ) -> Result<u64> {
        registry.require_role(Role::Redeemer, caller)?;
        require!(!self.paused, ReserveLedgerError::LedgerPaused);
        require_keys_neq!(from.holder, Pubkey::default(), ReserveLedgerError::ZeroAddress);
        require!(amount > 0, ReserveLedgerError::InvalidAmount);
        require!(from.balance >= amount, ReserveLedgerError::InsufficientBalance);

        let new_balance = from.balance.safe_sub(amount)?;
        let new_total = self.total_issuance.safe_sub(amount)?;
        let audit_id = self.audit_counter.safe_add(1)?;

        from.balance = new_balance;
        self.total_issuance = new_total;
        self.audit_counter = audit_id;
        Ok(audit_id)
    }

    /// Moves balance between holders. Not affected by the pause flag.
    pub fn transfer(
        &mut self,
        owner: &Pubkey,
        from: &mut HolderAccount,
        to: &mut HolderAccount,
        amount: u128,
    ) -> Result<u64> {
        require_keys_eq!(from.holder, *owner, ReserveLedgerError::Unauthorized);
        require_keys_neq!(to.holder, Pubkey::default(), ReserveLedgerError::ZeroAddress);
        require_keys_neq!(from.holder, to.holder, ReserveLedgerError::SelfTransfer);
        require!(amount > 0, ReserveLedgerError::InvalidAmount);
        require!(from.balance >= amount, ReserveLedgerError::InsufficientBalance);

        let new_from = from.balance.safe_sub(amount)?;
        let new_to = to.balance.safe_add(amount)?;
        let audit_id = self.audit_counter.safe_add(1)?;

        from.balance = new_from;
        to.balance = new_to;
        self.audit_counter = audit_id;
        Ok(audit_id)
    }

    pub fn set_cap(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        cap: Option<u128>,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        self.cap = cap;
        Ok(())
    }

    pub fn set_allow_list_enabled(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        enabled: bool,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        self.allow_list_enabled = enabled;
        Ok(())
    }

    /// Adds every holder not already listed; returns how many were new.
    pub fn add_to_allow_list(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        holders: &[Pubkey],
    ) -> Result<usize> {
        registry.require_role(Role::Admin, caller)?;
        require!(
            holders.iter().all(|holder| *holder != Pubkey::default()),
            ReserveLedgerError::ZeroAddress
        );

        let mut updated = self.allow_list.clone();
        for holder in holders {
            if !updated.contains(holder) {
                updated.push(*holder);
            }
        }
        require!(
            updated.len() <= MAX_ALLOW_LIST_LEN,
            ReserveLedgerError::AllowListFull
        );

        let added = updated.len() - self.allow_list.len();
        self.allow_list = updated;
        Ok(added)
    }

    /// Returns `false` when the holder was not listed.
    pub fn remove_from_allow_list(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        holder: &Pubkey,
    ) -> Result<bool> {
        registry.require_role(Role::Admin, caller)?;

        let before = self.allow_list.len();
        self.allow_list.retain(|listed| listed != holder);
        Ok(self.allow_list.len() != before)
    }

    pub fn set_paused(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        paused: bool,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        self.paused = paused;
        Ok(())
    }

    pub fn is_allow_listed(&self, holder: &Pubkey) -> bool {
        self.allow_list.contains(holder)
    }

    /// `cap - total_issuance` when capped, `UNBOUNDED_MINTABLE` otherwise.
    pub fn remaining_mintable(&self) -> u128 {
        match self.cap {
            Some(cap) => cap.saturating_sub(self.total_issuance),
            None => UNBOUNDED_MINTABLE,
        }
    }
}
