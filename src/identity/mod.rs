//! Identity records
//!
//! Users, their identity provider links and their authentication tokens. These
//! are plain records: storage, token hashing and expiry enforcement live with
//! the services that own them.

mod provider;
mod token;
mod user;

pub use provider::*;
pub use token::*;
pub use user::*;
