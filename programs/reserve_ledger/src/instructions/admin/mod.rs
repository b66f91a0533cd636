use super::*;

pub mod auth;
pub mod initialize;
pub mod roles;
pub mod issuance_policy;
pub mod pause;
pub mod reserve_config;
pub mod coordinator_config;

pub use auth::*;
pub use initialize::*;
pub use roles::*;
pub use issuance_policy::*;
pub use pause::*;
pub use reserve_config::*;
pub use coordinator_config::*;
