use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("tracing init failed: {}", e);
    }

    foyer_schedule::app::cli::run();
}
