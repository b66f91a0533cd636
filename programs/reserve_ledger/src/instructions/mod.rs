use super::*;


pub mod admin;
pub mod mint_tokens;
pub mod burn_tokens;
pub mod transfer_tokens;
pub mod submit_reserve_update;
pub mod issue_request;
pub mod fulfill_request;
pub mod views;


pub use admin::*;
pub use mint_tokens::*;
pub use burn_tokens::*;
pub use transfer_tokens::*;
pub use submit_reserve_update::*;
pub use issue_request::*;
pub use fulfill_request::*;
pub use views::*;
