pub mod error;
pub mod gl;

mod camera;
mod lights;
mod mat4;
mod material;
mod mesh;
mod rig;

pub use camera::Camera;
pub use error::Error;
pub use gl::{Drawable, GlState, HeroScene, RenderContext, fit_canvas_size};
pub use lights::LightRig;
pub use mat4::Mat4;
pub use material::{Material, unpack_rgb};
pub use mesh::{BOX_VERTEX_STRIDE, BoxMesh, EdgeMesh, cuboid, cuboid_edges};
pub use rig::{HeroModel, HeroMotion, HeroPart, PartGeometry};

/// GLSL dialect the shader preamble targets.
///
/// The hero shaders ship without a `#version` line so one source tree can
/// serve the browser and a desktop GL test harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlslVersion {
    /// WebGL2, OpenGL ES 3.0 (`#version 300 es`).
    Es300,
    /// Desktop OpenGL 3.3 core (`#version 330 core`).
    Gl330,
}

impl GlslVersion {
    /// Preamble prepended to vertex shader sources.
    pub fn vertex_preamble(&self) -> &'static str {
        match self {
            Self::Es300 => "#version 300 es\nprecision highp float;\n",
            Self::Gl330 => "#version 330 core\n",
        }
    }

    /// Preamble prepended to fragment shader sources. ES requires an explicit
    /// default precision; mediump is plenty for the hero's color math.
    pub fn fragment_preamble(&self) -> &'static str {
        match self {
            Self::Es300 => "#version 300 es\nprecision mediump float;\n",
            Self::Gl330 => "#version 330 core\n",
        }
    }
}
