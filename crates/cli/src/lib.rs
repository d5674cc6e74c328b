//! `larder-cli`
//!
//! **Responsibility:** interactive menu shell around the inventory store.
//!
//! The shell is a thin dispatcher: it collects text input, parses the
//! quantity, and prints whatever the store, the expiration checker and the
//! recipe matcher return. It holds no rules of its own.

pub mod config;
pub mod shell;

pub use config::AppConfig;
pub use shell::Shell;
