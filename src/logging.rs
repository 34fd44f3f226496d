// src/logging.rs
use log::LevelFilter;

/// Initialise `env_logger` on stderr. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default_level.as_str().to_ascii_lowercase());
    // A second initialisation (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
