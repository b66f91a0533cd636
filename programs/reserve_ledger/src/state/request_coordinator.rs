use super::*;

/// Parameters forwarded to the off-chain dispatcher with every request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct DispatchConfig {
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub don_id: [u8; 32],
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.subscription_id != 0 && self.callback_gas_limit != 0 && self.don_id != [0u8; 32],
            ReserveLedgerError::InvalidDispatchConfig
        );
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FulfillmentOutcome {
    /// Payload committed to the reserve state.
    Fulfilled,
    /// The fetch agent reported an error; nothing was forwarded.
    Failed { upstream_error: Vec<u8> },
    /// The payload did not decode or the reserve state refused it.
    /// `compared_values` keeps the `(age, ttl)` or `(got, min)` pair when the
    /// refusal carried one.
    Rejected {
        error_code: u32,
        compared_values: Option<[String; 2]>,
    },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestWindow {
    pub can_issue: bool,
    pub seconds_remaining: u64,
    pub next_sequence: u64,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct RequestCoordinator {
    pub bump: u8,
    pub next_sequence: u64,           // Allocated to the next issued request, starts at 1
    pub min_interval: u64,            // Seconds required since the last successful update
    pub last_success_at: Option<i64>, // None until the first fulfilled request
    pub response_channel: Pubkey,     // Only identity allowed to fulfill
    pub dispatch: DispatchConfig,
    #[max_len(512)]
    pub source: String,               // Request source handed to the fetch agent
    pub outstanding: u64,
    pub total_fulfilled: u64,
    pub total_failed: u64,
    pub total_rejected: u64,
}

/// One in-flight request, keyed by its correlation token. Closed when fulfilled.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct OutstandingRequest {
    pub token: [u8; 32],
    pub sequence: u64,
    pub issued_at: i64,
    pub requester: Pubkey,
    pub bump: u8,
}

/// Correlation token for the request allocated `sequence` on `coordinator`.
pub fn request_token(coordinator: &Pubkey, sequence: u64) -> [u8; 32] {
    hashv(&[
        REQUEST_TOKEN_DOMAIN,
        coordinator.as_ref(),
        &sequence.to_le_bytes(),
    ])
    .to_bytes()
}

impl RequestCoordinator {
    pub fn initialize(
        &mut self,
        bump: u8,
        min_interval: u64,
        response_channel: Pubkey,
        dispatch: DispatchConfig,
        source: String,
    ) -> Result<()> {
        require!(min_interval > 0, ReserveLedgerError::InvalidInterval);
        require_keys_neq!(response_channel, Pubkey::default(), ReserveLedgerError::ZeroAddress);
        dispatch.validate()?;
        validate_source(&source)?;

        self.bump = bump;
        self.next_sequence = 1;
        self.min_interval = min_interval;
        self.last_success_at = None;
        self.response_channel = response_channel;
        self.dispatch = dispatch;
        self.source = source;
        self.outstanding = 0;
        self.total_fulfilled = 0;
        self.total_failed = 0;
        self.total_rejected = 0;
        Ok(())
    }

    /// `(allowed, seconds until allowed)`; only the last success gates issuance.
    pub fn can_issue_request(&self, now: i64) -> (bool, u64) {
        match self.last_success_at {
            None => (true, 0),
            Some(last_success_at) => {
                let elapsed = now.saturating_sub(last_success_at).max(0) as u64;
                if elapsed >= self.min_interval {
                    (true, 0)
                } else {
                    (false, self.min_interval - elapsed)
                }
            }
        }
    }

    pub fn current_sequence(&self) -> u64 {
        self.next_sequence
    }

    pub fn request_window(&self, now: i64) -> RequestWindow {
        let (can_issue, seconds_remaining) = self.can_issue_request(now);
        RequestWindow {
            can_issue,
            seconds_remaining,
            next_sequence: self.next_sequence,
        }
    }

    /// Allocates the next sequence and returns the request record to persist.
    pub fn issue_request(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        coordinator_key: &Pubkey,
        now: i64,
    ) -> Result<OutstandingRequest> {
        registry.require_role(Role::Requester, caller)?;

        let (can_issue, seconds_remaining) = self.can_issue_request(now);
        if !can_issue {
            let elapsed = self.min_interval - seconds_remaining;
            return Err(
                error!(ReserveLedgerError::RequestTooSoon).with_values((elapsed, self.min_interval))
            );
        }

        let sequence = self.next_sequence;
        let next_sequence = sequence.safe_add(1)?;
        let outstanding = self.outstanding.safe_add(1)?;

        self.next_sequence = next_sequence;
        self.outstanding = outstanding;

        Ok(OutstandingRequest {
            token: request_token(coordinator_key, sequence),
            sequence,
            issued_at: now,
            requester: *caller,
            bump: 0,
        })
    }

    /// Resolves an outstanding request.
    ///
    /// Unknown tokens and foreign callers are errors. Every other path
    /// consumes the request and reports what happened through the outcome, so
    /// the caller can discard the mapping entry in the same transaction.
    #[allow(clippy::too_many_arguments)]
    pub fn fulfill(
        &mut self,
        registry: &AccessRegistry,
        reserve: &mut ReserveState,
        caller: &Pubkey,
        coordinator_key: &Pubkey,
        token: &[u8; 32],
        request: Option<&OutstandingRequest>,
        response: &FetchResponse,
        now: i64,
    ) -> Result<FulfillmentOutcome> {
        require_keys_eq!(
            *caller,
            self.response_channel,
            ReserveLedgerError::UnauthorizedResponseChannel
        );
        let request = match request {
            Some(request) if request.token == *token => request,
            _ => return err!(ReserveLedgerError::UnknownRequest),
        };

        self.outstanding = self.outstanding.saturating_sub(1);

        if response.is_failure() {
            self.total_failed = self.total_failed.safe_add(1)?;
            return Ok(FulfillmentOutcome::Failed {
                upstream_error: response.error.clone(),
            });
        }

        let committed = ReservePayload::decode(&response.response).and_then(|payload| {
            let update = ReserveUpdate {
                balance: payload.balance,
                observed_at: payload.observed_at,
                sequence: request.sequence,
            };
            reserve.accept_update(registry, coordinator_key, &update, now)
        });

        match committed {
            Ok(()) => {
                self.last_success_at = Some(now);
                self.total_fulfilled = self.total_fulfilled.safe_add(1)?;
                Ok(FulfillmentOutcome::Fulfilled)
            }
            Err(err) => {
                self.total_rejected = self.total_rejected.safe_add(1)?;
                Ok(FulfillmentOutcome::Rejected {
                    error_code: error_code_of(&err),
                    compared_values: compared_values_of(&err),
                })
            }
        }
    }

    pub fn set_min_interval(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        min_interval: u64,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        require!(min_interval > 0, ReserveLedgerError::InvalidInterval);
        self.min_interval = min_interval;
        Ok(())
    }

    pub fn set_dispatch_config(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        dispatch: DispatchConfig,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        dispatch.validate()?;
        self.dispatch = dispatch;
        Ok(())
    }

    pub fn set_source(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        source: String,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        validate_source(&source)?;
        self.source = source;
        Ok(())
    }

    pub fn set_response_channel(
        &mut self,
        registry: &AccessRegistry,
        caller: &Pubkey,
        response_channel: Pubkey,
    ) -> Result<()> {
        registry.require_role(Role::Admin, caller)?;
        require_keys_neq!(response_channel, Pubkey::default(), ReserveLedgerError::ZeroAddress);
        self.response_channel = response_channel;
        Ok(())
    }
}

fn validate_source(source: &str) -> Result<()> {
    require!(
        !source.is_empty() && source.len() <= MAX_REQUEST_SOURCE_LEN,
        ReserveLedgerError::InvalidRequestSource
    );
    Ok(())
}
