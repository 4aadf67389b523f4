mod buffer;
pub(crate) mod context;
pub(crate) mod hero_scene;
mod program;
pub(crate) mod renderer;
mod ubo;

use buffer::*;
pub use context::GlState;
pub use hero_scene::{HeroScene, fit_canvas_size};
pub(crate) use program::*;
pub use renderer::{Drawable, RenderContext};
