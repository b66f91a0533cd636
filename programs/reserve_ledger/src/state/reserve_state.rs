use super::*;

/// A reserve figure as submitted by an attestor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveUpdate {
    pub balance: u128,      // 18 decimals
    pub observed_at: i64,   // Seconds since epoch, as reported upstream
    pub sequence: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveSnapshot {
    pub balance: u128,
    pub observed_at: i64,
    pub sequence: u64,
    pub valid: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Freshness {
    pub valid: bool,
    pub age: u64,
    pub time_until_stale: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackingRatio {
    pub fully_backed: bool,
    pub ratio_bps: u64,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ReserveState {
    pub bump: u8,
    pub balance: u128,
    pub observed_at: i64,
    pub sequence: u64,            // Last accepted sequence, 0 before the first update
    #[max_len(32)]
    pub source_tag: String,
    pub ttl: u64,                 // Maximum accepted age in seconds, never 0
    pub last_updated_by: Pubkey,
    pub last_accepted_at: i64,
}

impl ReserveState {
    pub fn initialize(&mut self, bump: u8, ttl: u64, source_tag: String) -> Result<()> {
        require!(ttl > 0, ReserveLedgerError::InvalidTtl);
        require!(
            source_tag.len() <= MAX_SOURCE_TAG_LEN,
            ReserveLedgerError::SourceTagTooLong
        );

        self.bump = bump;
        self.balance = 0;
        self.observed_at = 0;
        self.sequence = 0;
        self.source_tag = source_tag;
        self.ttl = ttl;
        self.last_updated_by = Pubkey::default();
        self.last_accepted_at = 0;
        Ok(())
    }

    /// Validates and commits a new reserve figure.
    ///
    /// Checks run in a fixed order and stop at the first failure: malformed
    /// zero fields, future timestamp, staleness (`age`, `ttl` attached),
    /// non-increasing sequence (`got`, `min` attached).
    pub fn accept_update(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        update: &ReserveUpdate,
        now: i64,
    ) -> Result<()> {
        registry.require_role(Role::Attestor, caller)?;

        require!(
            update.balance != 0 && update.observed_at > 0,
            ReserveLedgerError::ZeroReserveData
        );
        require!(update.observed_at <= now, ReserveLedgerError::FutureTimestamp);

        let age = (now - update.observed_at) as u64;
        if age > self.ttl {
            return Err(error!(ReserveLedgerError::StaleData).with_values((age, self.ttl)));
        }

        if update.sequence <= self.sequence {
            let min_sequence = self.sequence.saturating_add(1);
            return Err(
                error!(ReserveLedgerError::InvalidSequence).with_values((update.sequence, min_sequence))
            );
        }

        self.balance = update.balance;
        self.observed_at = update.observed_at;
        self.sequence = update.sequence;
        self.last_updated_by = *caller;
        self.last_accepted_at = now;
        Ok(())
    }

    pub fn set_ttl(&mut self, registry: &AccessRegistry, caller: &Pubkey, ttl: u64) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        require!(ttl > 0, ReserveLedgerError::InvalidTtl);
        self.ttl = ttl;
        Ok(())
    }

    pub fn set_source_tag(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        source_tag: String,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        require!(
            source_tag.len() <= MAX_SOURCE_TAG_LEN,
            ReserveLedgerError::SourceTagTooLong
        );
        self.source_tag = source_tag;
        Ok(())
    }

    pub fn has_data(&self) -> bool {
        self.observed_at != 0
    }

    /// Seconds since the accepted observation. Before the first update this is
    /// measured from the epoch, so it always reads as stale.
    pub fn age(&self, now: i64) -> u64 {
        now.saturating_sub(self.observed_at).max(0) as u64
    }

    pub fn is_fresh(&self, now: i64) -> (bool, u64) {
        let age = self.age(now);
        (self.has_data() && age <= self.ttl, age)
    }

    /// 0 when already stale or never set.
    pub fn time_until_stale(&self, now: i64) -> u64 {
        if !self.has_data() {
            return 0;
        }
        self.ttl.saturating_sub(self.age(now))
    }

    pub fn freshness(&self, now: i64) -> Freshness {
        let (valid, age) = self.is_fresh(now);
        Freshness {
            valid,
            age,
            time_until_stale: self.time_until_stale(now),
        }
    }

    pub fn snapshot(&self, now: i64) -> ReserveSnapshot {
        ReserveSnapshot {
            balance: self.balance,
            observed_at: self.observed_at,
            sequence: self.sequence,
            valid: self.is_fresh(now).0,
        }
    }

    /// Informational only; nothing on the ledger consults it.
    pub fn backing_ratio(&self, total_issuance: u128) -> BackingRatio {
        if total_issuance == 0 {
            return BackingRatio {
                fully_backed: true,
                ratio_bps: BASIS_POINT_MAX,
            };
        }
        BackingRatio {
            fully_backed: self.balance >= total_issuance,
            ratio_bps: ratio_in_basis_points(self.balance, total_issuance),
        }
    }
}
