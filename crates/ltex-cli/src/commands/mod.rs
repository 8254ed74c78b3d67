//! Command implementations for ltex-cli

pub mod add;
pub mod command;
pub mod expand;
pub mod scopes;
pub mod server;

pub use add::run_add;
pub use command::run_command;
pub use expand::run_expand;
pub use scopes::run_scopes;
pub use server::run_server;
