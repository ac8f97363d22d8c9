//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use slide_rush::{GameConfig, GameController, TileId};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A controller with the default sprint-review setup.
pub fn controller() -> GameController {
    init_logging();
    GameController::new(GameConfig::default())
}

/// Look up a sprint-review tile by name.
pub fn tile(game: &GameController, name: &str) -> TileId {
    game.session()
        .tiles()
        .id_of(name)
        .unwrap_or_else(|| panic!("no tile named {name}"))
}

pub const REQUIRED: [&str; 5] = ["header", "list", "image", "chart", "plans"];
