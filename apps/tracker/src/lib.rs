pub mod command;
pub mod config;
pub mod display;
pub mod repl;
pub mod session;

pub use session::{Flow, Outcome, Session};

pub type Error = anyhow::Error;
