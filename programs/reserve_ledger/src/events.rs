use super::*;

#[event]
pub struct ProgramInitializedEvent {
    pub authority: Pubkey,
    pub access_registry: Pubkey,
    pub ledger: Pubkey,
    pub reserve_state: Pubkey,
    pub coordinator: Pubkey,
    pub cap: Option<u128>,
    pub ttl: u64,
    pub min_interval: u64,
    pub response_channel: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub holder: Pubkey,
    pub granted_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub holder: Pubkey,
    pub revoked_by: Pubkey,
    pub remaining_admins: u8,
    pub timestamp: i64,
}

#[event]
pub struct TokensMintedEvent {
    pub audit_id: u64,
    pub issuer: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
    pub total_issuance: u128,
    pub timestamp: i64,
}

#[event]
pub struct TokensBurnedEvent {
    pub audit_id: u64,
    pub redeemer: Pubkey,
    pub from: Pubkey,
    pub amount: u128,
    pub total_issuance: u128,
    pub timestamp: i64,
}

#[event]
pub struct TokensTransferredEvent {
    pub audit_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct IssuanceCapUpdatedEvent {
    pub old_cap: Option<u128>,
    pub new_cap: Option<u128>,
    pub total_issuance: u128,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AllowListToggledEvent {
    pub enabled: bool,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AllowListUpdatedEvent {
    pub holders: Vec<Pubkey>,
    pub added: bool,
    pub changed: u32,
    pub list_len: u32,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PauseStatusChangedEvent {
    pub paused: bool,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ReserveUpdatedEvent {
    pub balance: u128,
    pub observed_at: i64,
    pub sequence: u64,
    pub attestor: Pubkey,
    pub timestamp: i64,
}

impl ReserveUpdatedEvent {
    /// The update `reserve` last committed, attributed to whoever committed it.
    pub fn committed(reserve: &ReserveState, timestamp: i64) -> Self {
        Self {
            balance: reserve.balance,
            observed_at: reserve.observed_at,
            sequence: reserve.sequence,
            attestor: reserve.last_updated_by,
            timestamp,
        }
    }
}

#[event]
pub struct ReserveConfigUpdatedEvent {
    pub ttl: u64,
    pub source_tag: String,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RequestIssuedEvent {
    pub token: [u8; 32],
    pub sequence: u64,
    pub requester: Pubkey,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub don_id: [u8; 32],
    pub source: String,
    pub timestamp: i64,
}

#[event]
pub struct RequestFulfilledEvent {
    pub token: [u8; 32],
    pub sequence: u64,
    pub balance: u128,
    pub observed_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct RequestFailedEvent {
    pub token: [u8; 32],
    pub sequence: u64,
    pub error_code: u32,
    pub upstream_error: Vec<u8>,
    pub timestamp: i64,
}

#[event]
pub struct RequestRejectedEvent {
    pub token: [u8; 32],
    pub sequence: u64,
    pub error_code: u32,
    pub compared_values: Vec<String>, // [left, right] from the refusal, empty when it carried none
    pub timestamp: i64,
}

#[event]
pub struct CoordinatorConfigUpdatedEvent {
    pub config_type: String,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}
