use std::fmt::Debug;

use glow::HasContext;

use crate::{
    camera::Camera,
    error::Error,
    gl::{
        Drawable, GlState, RenderContext, ShaderProgram, buffer_upload_array, ubo::UniformBlock,
    },
    lights::LightRig,
    mat4::Mat4,
    material::Material,
    mesh::BOX_VERTEX_STRIDE,
    rig::{HeroModel, HeroMotion, HeroPart, PartGeometry},
};

/// WebGL2 renderer for the rotating hero object.
///
/// `HeroScene` uploads the hero model's parts once and redraws them every
/// frame under a fixed camera and light rig. Solid parts get a Blinn-Phong
/// response from the rig; the outline renders as unlit lines. All parts share
/// one shader program and move together under the motion group transform.
#[derive(Debug)]
#[must_use = "call `delete(gl)` before dropping to avoid GPU resource leaks"]
pub struct HeroScene {
    /// GPU resources (shader, buffers, UBOs) - recreated on context loss
    gpu: GpuResources,
    /// Fixed perspective camera, aspect pinned to the square canvas.
    camera: Camera,
    /// Light rig, uploaded to the fragment UBO once.
    lights: LightRig,
    /// Spin / tilt / bob state driving the group transform.
    motion: HeroMotion,
    /// Canvas backing size in physical pixels (square).
    size_px: i32,
    /// Upper bound for the canvas backing size.
    max_size_px: i32,
}

/// GPU resources that need to be recreated after a context loss.
///
/// This struct encapsulates all GL-dependent resources: shader program,
/// per-part vertex data, uniform buffer objects, and uniform locations.
/// These resources become invalid after a context loss and must be
/// recreated with a fresh GL context.
#[derive(Debug)]
struct GpuResources {
    /// Shader program shared by all hero parts.
    shader: ShaderProgram,
    /// One VAO + buffers per hero part, in draw order.
    parts: Vec<GpuPart>,
    /// Shared per-frame state (view-projection, camera position).
    ubo_frame: UniformBlock,
    /// Light rig parameters for the fragment shader.
    ubo_lights: UniformBlock,
    /// Per-part uniform locations.
    uniforms: PartUniforms,
}

impl GpuResources {
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/hero.frag");
    const VERTEX_GLSL: &'static str = include_str!("../shaders/hero.vert");

    fn delete(&self, gl: &glow::Context) {
        self.shader.delete(gl);
        for part in &self.parts {
            part.delete(gl);
        }
        self.ubo_frame.delete(gl);
        self.ubo_lights.delete(gl);
    }

    /// Creates all GPU resources for the hero scene.
    ///
    /// This method creates and initializes:
    /// - Shader program (version preamble injected by [`ShaderProgram::build`])
    /// - One VAO plus vertex and index buffers per hero part
    /// - Uniform blocks for the frame and light data
    fn new(
        gl: &glow::Context,
        model: &HeroModel,
        glsl_version: &crate::GlslVersion,
    ) -> Result<Self, Error> {
        let shader = ShaderProgram::build(gl, glsl_version, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;
        shader.use_program(gl);

        let parts = model
            .parts()
            .iter()
            .map(|part| create_part(gl, part))
            .collect::<Result<Vec<_>, Error>>()?;

        let ubo_frame = UniformBlock::for_shader(gl, &shader, "FrameUbo", FrameUbo::BINDING_POINT)?;
        let ubo_lights = UniformBlock::for_shader(gl, &shader, "LightUbo", LightUbo::BINDING_POINT)?;

        let uniforms = PartUniforms::locate(gl, &shader)?;

        Ok(Self {
            shader,
            parts,
            ubo_frame,
            ubo_lights,
            uniforms,
        })
    }
}

/// Uniform locations that change per hero part.
#[derive(Debug)]
struct PartUniforms {
    model: glow::UniformLocation,
    color: glow::UniformLocation,
    opacity: glow::UniformLocation,
    emissive: glow::UniformLocation,
    shininess: glow::UniformLocation,
    lit: glow::UniformLocation,
}

impl PartUniforms {
    fn locate(gl: &glow::Context, shader: &ShaderProgram) -> Result<Self, Error> {
        Ok(Self {
            model: shader.uniform_location(gl, "u_model")?,
            color: shader.uniform_location(gl, "u_color")?,
            opacity: shader.uniform_location(gl, "u_opacity")?,
            emissive: shader.uniform_location(gl, "u_emissive")?,
            shininess: shader.uniform_location(gl, "u_shininess")?,
            lit: shader.uniform_location(gl, "u_lit")?,
        })
    }
}

/// GPU-side mirror of one [`HeroPart`].
#[derive(Debug)]
struct GpuPart {
    vao: glow::VertexArray,
    vertices: glow::Buffer,
    indices: glow::Buffer,
    index_count: i32,
    /// `glow::TRIANGLES` for solid parts, `glow::LINES` for the outline.
    mode: u32,
    /// Whether the fragment shader applies the light rig.
    lit: bool,
    /// Part offset inside the hero group, baked as a translation.
    local: Mat4,
    material: Material,
}

impl GpuPart {
    fn delete(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vertices);
            gl.delete_buffer(self.indices);
        }
    }
}

impl HeroScene {
    pub fn new(
        gl: &glow::Context,
        model: &HeroModel,
        container_width: i32,
        max_size_px: i32,
        glsl_version: &crate::GlslVersion,
    ) -> Result<Self, Error> {
        let scene = Self {
            gpu: GpuResources::new(gl, model, glsl_version)?,
            camera: Camera::default(),
            lights: LightRig::default(),
            motion: HeroMotion::new(),
            size_px: fit_canvas_size(container_width, max_size_px),
            max_size_px,
        };

        scene.upload_ubo_data(gl);

        Ok(scene)
    }

    /// Deletes all GPU resources owned by this scene.
    ///
    /// This must be called before dropping the `HeroScene` to avoid GPU
    /// resource leaks on native OpenGL targets. On WASM, WebGL context teardown
    /// handles cleanup automatically, but explicit deletion is still recommended.
    pub fn delete(self, gl: &glow::Context) {
        self.gpu.delete(gl);
    }

    /// Uploads uniform buffer data for the camera and light rig.
    fn upload_ubo_data(&self, gl: &glow::Context) {
        self.gpu.ubo_frame.upload(gl, &FrameUbo::new(&self.camera));
        self.gpu.ubo_lights.upload(gl, &LightUbo::new(&self.lights));
    }

    /// Advances the hero motion by `dt` seconds. With `animate` false the
    /// object keeps rendering in its current pose.
    pub fn advance(&mut self, dt: f32, animate: bool) {
        self.motion.advance(dt, animate);
    }

    /// Resizes the scene to fit a container of the given width.
    ///
    /// The canvas stays square and never exceeds the configured maximum, so
    /// only the viewport changes; the camera keeps its unit aspect.
    pub fn resize(&mut self, gl: &glow::Context, container_width: i32) {
        let size = fit_canvas_size(container_width, self.max_size_px);
        if size == self.size_px {
            return;
        }

        self.size_px = size;
        self.camera.set_aspect(1.0);
        self.upload_ubo_data(gl);
    }

    /// Canvas backing size in physical pixels (width and height).
    pub fn size(&self) -> i32 {
        self.size_px
    }

    /// Accumulated rotation around the vertical axis, in radians.
    pub fn yaw(&self) -> f32 {
        self.motion.yaw()
    }

    /// Renders the hero scene in a single call.
    ///
    /// Convenience wrapper that builds a [`RenderContext`] and runs the
    /// [`Drawable`] lifecycle in order. Callers compositing with other GL
    /// content can drive the trait methods themselves.
    pub fn render(&self, gl: &glow::Context, state: &mut GlState) {
        let mut ctx = RenderContext { gl, state };
        self.prepare(&mut ctx);
        self.draw(&mut ctx);
        self.cleanup(&mut ctx);
    }
}

impl Drawable for HeroScene {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.gpu.shader.use_program(gl);
        self.gpu.ubo_frame.bind(gl);
        self.gpu.ubo_lights.bind(gl);

        context
            .state
            .viewport(gl, 0, 0, self.size_px, self.size_px)
            .clear_color(gl, 0.0, 0.0, 0.0, 0.0)
            .blend_func(gl, glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA)
            .set_capability(gl, glow::BLEND, true)
            .set_capability(gl, glow::DEPTH_TEST, true)
            .set_capability(gl, glow::CULL_FACE, false);

        unsafe { gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };
    }

    fn draw(&self, context: &mut RenderContext) {
        let gl = context.gl;
        let group = self.motion.model_matrix();
        let uniforms = &self.gpu.uniforms;

        for part in &self.gpu.parts {
            let model = group.multiply(&part.local);
            let [r, g, b] = part.material.color_rgb();
            let [er, eg, eb] = part.material.emissive_rgb();

            unsafe {
                gl.uniform_matrix_4_f32_slice(Some(&uniforms.model), false, model.as_slice());
                gl.uniform_3_f32(Some(&uniforms.color), r, g, b);
                gl.uniform_1_f32(Some(&uniforms.opacity), part.material.opacity);
                gl.uniform_3_f32(Some(&uniforms.emissive), er, eg, eb);
                gl.uniform_1_f32(Some(&uniforms.shininess), part.material.shininess);
                gl.uniform_1_i32(Some(&uniforms.lit), part.lit as i32);

                gl.bind_vertex_array(Some(part.vao));
                gl.draw_elements(part.mode, part.index_count, glow::UNSIGNED_SHORT, 0);
            }
        }
    }

    fn cleanup(&self, context: &mut RenderContext) {
        let gl = context.gl;
        unsafe {
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }

        self.gpu.ubo_frame.unbind(gl);
        self.gpu.ubo_lights.unbind(gl);
    }
}

/// Clamps a square canvas size to the container width and the configured
/// maximum, with a floor of one pixel.
pub fn fit_canvas_size(container_width: i32, max_size_px: i32) -> i32 {
    container_width.min(max_size_px).max(1)
}

fn create_part(gl: &glow::Context, part: &HeroPart) -> Result<GpuPart, Error> {
    // Create and setup the Vertex Array Object
    let vao = unsafe { gl.create_vertex_array() }.map_err(Error::vertex_array_creation_failed)?;
    unsafe { gl.bind_vertex_array(Some(vao)) };

    let (vertices, indices, index_count, mode, lit) = match &part.geometry {
        PartGeometry::Solid(mesh) => {
            let vertices = create_vertex_buffer(gl, &mesh.vertices)?;
            let stride = (BOX_VERTEX_STRIDE * size_of::<f32>()) as i32;
            enable_vertex_attrib(gl, attrib::POSITION, 3, 0, stride);
            enable_vertex_attrib(gl, attrib::NORMAL, 3, 12, stride);

            let indices = create_index_buffer(gl, &mesh.indices)?;
            (
                vertices,
                indices,
                mesh.indices.len() as i32,
                glow::TRIANGLES,
                true,
            )
        },
        PartGeometry::Wire(mesh) => {
            let vertices = create_vertex_buffer(gl, &mesh.positions)?;
            let stride = (3 * size_of::<f32>()) as i32;
            enable_vertex_attrib(gl, attrib::POSITION, 3, 0, stride);

            let indices = create_index_buffer(gl, &mesh.indices)?;
            (
                vertices,
                indices,
                mesh.indices.len() as i32,
                glow::LINES,
                false,
            )
        },
    };

    // Unbind VAO to prevent accidental modification
    unsafe { gl.bind_vertex_array(None) };

    let [x, y, z] = part.offset;
    Ok(GpuPart {
        vao,
        vertices,
        indices,
        index_count,
        mode,
        lit,
        local: Mat4::translation(x, y, z),
        material: part.material,
    })
}

fn create_vertex_buffer(gl: &glow::Context, data: &[f32]) -> Result<glow::Buffer, Error> {
    let buffer = unsafe { gl.create_buffer() }
        .map_err(|e| Error::buffer_creation_failed("part-vertices", e))?;

    unsafe {
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
        buffer_upload_array(gl, glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
    }

    Ok(buffer)
}

fn create_index_buffer(gl: &glow::Context, data: &[u16]) -> Result<glow::Buffer, Error> {
    let buffer = unsafe { gl.create_buffer() }
        .map_err(|e| Error::buffer_creation_failed("part-indices", e))?;

    unsafe {
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
        buffer_upload_array(gl, glow::ELEMENT_ARRAY_BUFFER, data, glow::STATIC_DRAW);
    }

    Ok(buffer)
}

fn enable_vertex_attrib(gl: &glow::Context, index: u32, size: i32, offset: i32, stride: i32) {
    unsafe {
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer_f32(index, size, glow::FLOAT, false, stride, offset);
    }
}

#[derive(Clone, Copy)]
#[repr(C, align(16))] // std140 layout requires proper alignment
struct FrameUbo {
    pub view_proj: [f32; 16], // mat4
    pub camera_pos: [f32; 4], // vec4 - xyz camera position, w unused
}

#[derive(Clone, Copy)]
#[repr(C, align(16))] // std140 layout requires proper alignment
struct LightUbo {
    pub ambient: [f32; 4],        // rgb premultiplied by intensity, w unused
    pub dir_color: [f32; 4],      // rgb premultiplied by intensity, w unused
    pub dir_direction: [f32; 4],  // xyz toward the light, w unused
    pub point_color: [f32; 4],    // rgb premultiplied by intensity, w unused
    pub point_position: [f32; 4], // xyz light position, w range
}

impl FrameUbo {
    pub const BINDING_POINT: u32 = 0;

    fn new(camera: &Camera) -> Self {
        let [x, y, z] = camera.position;
        Self {
            view_proj: camera.view_projection().0,
            camera_pos: [x, y, z, 0.0],
        }
    }
}

impl LightUbo {
    pub const BINDING_POINT: u32 = 1;

    fn new(lights: &LightRig) -> Self {
        let [ar, ag, ab] = lights.ambient_rgb();
        let [dr, dg, db] = lights.directional_rgb();
        let [dx, dy, dz] = lights.directional_unit();
        let [pr, pg, pb] = lights.point_rgb();
        let [px, py, pz] = lights.point_position;

        Self {
            ambient: [ar, ag, ab, 0.0],
            dir_color: [dr, dg, db, 0.0],
            dir_direction: [dx, dy, dz, 0.0],
            point_color: [pr, pg, pb, 0.0],
            point_position: [px, py, pz, lights.point_range],
        }
    }
}

mod attrib {
    pub const POSITION: u32 = 0;
    pub const NORMAL: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_canvas_size_clamps_to_maximum() {
        assert_eq!(fit_canvas_size(1920, 384), 384);
        assert_eq!(fit_canvas_size(384, 384), 384);
        assert_eq!(fit_canvas_size(300, 384), 300);
    }

    #[test]
    fn test_fit_canvas_size_floors_at_one_pixel() {
        assert_eq!(fit_canvas_size(0, 384), 1);
        assert_eq!(fit_canvas_size(-200, 384), 1);
    }

    #[test]
    fn test_ubo_layouts_are_vec4_multiples() {
        // std140 requires 16-byte multiples for buffer-backed blocks
        assert_eq!(size_of::<FrameUbo>() % 16, 0);
        assert_eq!(size_of::<LightUbo>() % 16, 0);
        assert_eq!(size_of::<FrameUbo>(), 80);
        assert_eq!(size_of::<LightUbo>(), 80);
    }

    #[test]
    fn test_light_ubo_packs_range_into_position_w() {
        let rig = LightRig::default();
        let ubo = LightUbo::new(&rig);
        assert_eq!(ubo.point_position[3], rig.point_range);
        assert_eq!(
            [ubo.point_position[0], ubo.point_position[1], ubo.point_position[2]],
            rig.point_position
        );
    }

    #[test]
    fn test_frame_ubo_carries_camera_position() {
        let camera = Camera::default();
        let ubo = FrameUbo::new(&camera);
        assert_eq!(&ubo.camera_pos[..3], &camera.position[..]);
        assert_eq!(ubo.view_proj, camera.view_projection().0);
    }
}
