mod schedule_backend;
mod token_store;

pub use schedule_backend::ScheduleBackend;
pub use token_store::{NoToken, StaticToken, TokenStore};
