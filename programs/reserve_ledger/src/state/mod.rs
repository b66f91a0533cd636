use super::*;

pub mod access_registry;
pub mod ledger;
pub mod reserve_state;
pub mod request_coordinator;

pub use access_registry::*;
pub use ledger::*;
pub use reserve_state::*;
pub use request_coordinator::*;

// Per-holder and per-request accounts are created by users; keep their rent fixed.
const_assert_eq!(HolderAccount::INIT_SPACE, 49);
const_assert_eq!(OutstandingRequest::INIT_SPACE, 81);
