mod font;
mod renderer;
mod sprite;
mod surface;

pub use renderer::Renderer;
pub use sprite::{Sprite, SpriteError};
pub use surface::{Surface, TextAlign};
