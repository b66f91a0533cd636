// PDA seeds
pub const ACCESS_REGISTRY_SEED: &[u8] = b"access_registry";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const RESERVE_STATE_SEED: &[u8] = b"reserve_state";
pub const COORDINATOR_SEED: &[u8] = b"coordinator";
pub const REQUEST_SEED: &[u8] = b"request";

pub const TOKEN_DECIMALS: u32 = 18;
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000; // 1e18 base units

pub const BASIS_POINT_MAX: u64 = 10_000;       // 100% in basis points

/// Sentinel returned by `remaining_mintable` when no cap is set.
pub const UNBOUNDED_MINTABLE: u128 = u128::MAX;

pub const MAX_ROLE_GRANTS: usize = 32;
pub const MAX_ALLOW_LIST_LEN: usize = 64;
pub const MAX_SOURCE_TAG_LEN: usize = 32;
pub const MAX_REQUEST_SOURCE_LEN: usize = 512;

/// Domain separator mixed into every correlation token.
pub const REQUEST_TOKEN_DOMAIN: &[u8] = b"reserve_ledger:request";

/// Layout of the custodian's report timestamp: DD-MM-YYYY HH:mm:ss
pub const REPORT_TIMESTAMP_LEN: usize = 19;
pub const REPORT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Reported in events for builtin program errors, which carry no `u32` code.
pub const UNCLASSIFIED_ERROR_CODE: u32 = u32::MAX;
