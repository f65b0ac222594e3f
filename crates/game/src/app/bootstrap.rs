use std::cell::RefCell;
use std::rc::Rc;

use engine::{LoopConfig, SceneSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::assets::SpriteBank;
use super::scenes;
use super::settings;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scenes: SceneSet,
}

/// Composition root: installs tracing, resolves settings, and wires the
/// sprite bank into the scene catalog.
pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Cosmic Blaster Startup ===");

    let settings = settings::load_settings();
    info!(
        window_width = settings.window_width,
        window_height = settings.window_height,
        render_fps_cap = ?settings.max_render_fps,
        practice = settings.practice,
        "settings_resolved"
    );

    let sprites = Rc::new(RefCell::new(SpriteBank::new()));
    let scenes = scenes::build_scene_set(&sprites, settings.practice);
    let config = LoopConfig {
        window_width: settings.window_width,
        window_height: settings.window_height,
        max_render_fps: settings.max_render_fps,
        ..LoopConfig::default()
    };

    AppWiring { config, scenes }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
