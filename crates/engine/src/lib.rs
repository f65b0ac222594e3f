//! Core engine for Cosmic Blaster: the scene state machine, a
//! fixed-timestep frame loop over winit, keyboard input collection, and
//! a small software renderer that draws into a logical frame buffer
//! presented through `pixels`.

pub mod app;

pub use app::{
    run_app, AppError, GameResult, GameState, InputAction, InputSnapshot, LoopConfig,
    LoopMetricsSnapshot, Renderer, Scene, SceneCommand, SceneContext, SceneMachine, SceneSet,
    Sprite, SpriteError, Surface, TextAlign,
};
