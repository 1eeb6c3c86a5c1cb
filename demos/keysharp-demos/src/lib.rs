#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// the threshold control and the key wait of the interactive demos.
pub mod control;

/// showing images while a demo runs.
pub mod display;

/// The exit code of a demo whose input image cannot be loaded.
pub const LOAD_FAILURE_EXIT_CODE: i32 = -1;

/// Initialize the logger, defaulting to the `info` level when `RUST_LOG` is unset.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
