use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(token: [u8; 32])]
pub struct FulfillRequest<'info> {
    pub response_channel: Signer<'info>,

    #[account(
        seeds = [ACCESS_REGISTRY_SEED],
        bump = access_registry.bump,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        seeds = [RESERVE_STATE_SEED],
        bump = reserve_state.bump,
    )]
    pub reserve_state: Box<Account<'info, ReserveState>>,

    #[account(
        mut,
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
    )]
    pub coordinator: Box<Account<'info, RequestCoordinator>>,

    /// CHECK: may be empty. An address with no live `OutstandingRequest` is an unknown token.
    #[account(
        mut,
        seeds = [REQUEST_SEED, coordinator.key().as_ref(), token.as_ref()],
        bump
    )]
    pub request: UncheckedAccount<'info>,

    /// CHECK: receives the request rent back, must be the requester that paid it
    #[account(mut)]
    pub requester: UncheckedAccount<'info>,
}

impl FulfillRequest<'_> {
    pub fn handler(mut ctx: Context<FulfillRequest>, token: [u8; 32], response: FetchResponse) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;
        let channel = ctx.accounts.response_channel.key();
        let coordinator_key = ctx.accounts.coordinator.key();

        let outstanding = load_outstanding_request(&ctx.accounts.request);

        let accounts = &mut ctx.accounts;
        let outcome = accounts.coordinator.fulfill(
            &accounts.access_registry,
            &mut accounts.reserve_state,
            &channel,
            &coordinator_key,
            &token,
            outstanding.as_ref(),
            &response,
            now,
        )?;
        let request = outstanding.ok_or_else(|| error!(ReserveLedgerError::UnknownRequest))?;

        require_keys_eq!(
            accounts.requester.key(),
            request.requester,
            ReserveLedgerError::RentReceiverMismatch
        );
        close_request(
            &accounts.request.to_account_info(),
            &accounts.requester.to_account_info(),
        )?;

        match outcome {
            FulfillmentOutcome::Fulfilled => {
                let committed = ReserveUpdatedEvent::committed(&accounts.reserve_state, now);
                msg!("Request {} fulfilled", request.sequence);
                emit_cpi!(RequestFulfilledEvent {
                    token,
                    sequence: request.sequence,
                    balance: committed.balance,
                    observed_at: committed.observed_at,
                    timestamp: now,
                });
                emit_cpi!(committed);
            }
            FulfillmentOutcome::Failed { upstream_error } => {
                msg!(
                    "Request {} failed upstream: {}",
                    request.sequence,
                    String::from_utf8_lossy(&upstream_error)
                );
                emit_cpi!(RequestFailedEvent {
                    token,
                    sequence: request.sequence,
                    error_code: u32::from(ReserveLedgerError::UpstreamFailure),
                    upstream_error,
                    timestamp: now,
                });
            }
            FulfillmentOutcome::Rejected {
                error_code,
                compared_values,
            } => {
                let compared_values = compared_values.map(Vec::from).unwrap_or_default();
                msg!(
                    "Request {} rejected with error {} {:?}",
                    request.sequence,
                    error_code,
                    compared_values
                );
                emit_cpi!(RequestRejectedEvent {
                    token,
                    sequence: request.sequence,
                    error_code,
                    compared_values,
                    timestamp: now,
                });
            }
        }

        Ok(())
    }
}

/// `None` unless the account is a live request owned by this program.
fn load_outstanding_request(info: &AccountInfo) -> Option<OutstandingRequest> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    let mut bytes: &[u8] = &data;
    OutstandingRequest::try_deserialize(&mut bytes).ok()
}

fn close_request<'info>(request: &AccountInfo<'info>, receiver: &AccountInfo<'info>) -> Result<()> {
    let refunded = receiver.lamports().safe_add(request.lamports())?;
    **receiver.try_borrow_mut_lamports()? = refunded;
    **request.try_borrow_mut_lamports()? = 0;

    request.assign(&System::id());
    request.realloc(0, false)?;
    Ok(())
}
