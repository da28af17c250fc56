use env_logger::{Builder, Env};

/// Initializes the global logger.
///
/// Only warnings are shown unless `RUST_LOG` says otherwise. Output goes to
/// stderr, so redirect it (`2>game.log`) to keep it off the playfield.
pub fn init() {
    let env = Env::default().default_filter_or("warn");
    // `try_init` only fails if a logger was already set; tests may call this
    // more than once.
    let _ = Builder::from_env(env).try_init();
}
