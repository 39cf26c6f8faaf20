mod player;
mod world;

use std::path::PathBuf;
use std::sync::Arc;

use engine::{run_app, ImageData, LoopConfig, Sprite, SpriteError};
use tracing::error;
use tracing_subscriber::EnvFilter;

use world::WorldScene;

fn main() {
    init_tracing();

    let scene = match build_scene() {
        Ok(scene) => scene,
        Err(source) => {
            error!(error = %source, "asset_load_failed");
            std::process::exit(1);
        }
    };

    let config = LoopConfig {
        window_title: "Sidewalk".to_string(),
        canvas_width: world::CANVAS_WIDTH,
        canvas_height: world::CANVAS_HEIGHT,
    };
    if let Err(source) = run_app(config, Box::new(scene)) {
        error!(error = %source, "app_failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn build_scene() -> Result<WorldScene, SpriteError> {
    let assets = asset_dir();
    let idle = load_sprite(&assets.join("guy_idle.png"))?;
    let run = load_sprite(&assets.join("guy_run.png"))?;
    Ok(WorldScene::new(idle, run))
}

fn load_sprite(path: &std::path::Path) -> Result<Arc<Sprite>, SpriteError> {
    let image = ImageData::load(path)?;
    Ok(Arc::new(Sprite::new(Arc::new(image))))
}

/// Prefers an `assets/` directory next to the executable's working
/// directory, falling back to the workspace copy for `cargo run`.
fn asset_dir() -> PathBuf {
    let local = PathBuf::from("assets");
    if local.is_dir() {
        return local;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}
