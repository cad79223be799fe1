pub mod delete;
pub mod export;
pub mod set;
pub mod show;
