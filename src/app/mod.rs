pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod export;
pub mod session;

pub use context::AppContext;
