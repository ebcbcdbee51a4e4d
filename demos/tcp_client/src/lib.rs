//! Library facade for the `tcp_client` demo so integration tests can reuse
//! its scopes and command handlers.

pub mod cli;
pub mod error;
pub mod resolve;
pub mod scopes;
