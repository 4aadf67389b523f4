use std::fmt::Debug;

use glow::HasContext;

use crate::{GlslVersion, error::Error};

/// Linked GLSL program shared by every hero part.
///
/// Shader sources ship without a `#version` line; the preamble for the
/// requested dialect is prepended here so the same shader text serves
/// WebGL2 and desktop GL.
#[derive(Debug)]
pub(crate) struct ShaderProgram {
    pub(crate) program: glow::Program,
}

impl ShaderProgram {
    pub(crate) fn build(
        gl: &glow::Context,
        glsl: &GlslVersion,
        vertex_body: &str,
        fragment_body: &str,
    ) -> Result<Self, Error> {
        let vertex = compile_stage(
            gl,
            glow::VERTEX_SHADER,
            "vertex",
            &format!("{}{vertex_body}", glsl.vertex_preamble()),
        )?;
        let fragment = compile_stage(
            gl,
            glow::FRAGMENT_SHADER,
            "fragment",
            &format!("{}{fragment_body}", glsl.fragment_preamble()),
        )?;

        let program =
            unsafe { gl.create_program() }.map_err(|_| Error::shader_program_creation_failed())?;
        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            // linked binaries keep working without the stage objects
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        if !unsafe { gl.get_program_link_status(program) } {
            let log = unsafe { gl.get_program_info_log(program) };
            unsafe { gl.delete_program(program) };
            return Err(Error::shader_link_failed(log));
        }

        Ok(ShaderProgram { program })
    }

    /// Use the shader program.
    pub(crate) fn use_program(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Looks up a uniform by name. A missing name means the Rust side and
    /// the shader text disagree, so it surfaces as an error instead of a
    /// silently ignored `None` location.
    pub(crate) fn uniform_location(
        &self,
        gl: &glow::Context,
        name: &'static str,
    ) -> Result<glow::UniformLocation, Error> {
        unsafe { gl.get_uniform_location(self.program, name) }
            .ok_or(Error::uniform_location_failed(name))
    }

    /// Deletes the program, releasing the GPU resource.
    pub(crate) fn delete(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, Error> {
    let shader =
        unsafe { gl.create_shader(kind) }.map_err(|_| Error::shader_creation_failed(stage))?;

    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
    }

    if !unsafe { gl.get_shader_compile_status(shader) } {
        let log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        return Err(Error::shader_compile_failed(stage, log));
    }

    Ok(shader)
}
