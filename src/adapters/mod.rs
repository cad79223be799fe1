pub mod backend_http;
pub mod memory_backend;
pub mod pdf;
pub mod token_file;
