use std::fmt::Debug;

use glow::HasContext;

use crate::{
    error::Error,
    gl::{ShaderProgram, buffer_upload_struct},
};

/// One std140 uniform block, created against the interface block it feeds.
///
/// The block is resolved by name on the shader and wired to its binding
/// point once; afterwards the buffer is only re-uploaded when the CPU-side
/// data changes (camera or light edits). Frame rendering just binds and
/// unbinds the point.
#[derive(Debug)]
pub(crate) struct UniformBlock {
    buffer: glow::Buffer,
    binding_point: u32,
}

impl UniformBlock {
    pub(crate) fn for_shader(
        gl: &glow::Context,
        shader: &ShaderProgram,
        block_name: &'static str,
        binding_point: u32,
    ) -> Result<Self, Error> {
        let buffer = unsafe { gl.create_buffer() }
            .map_err(|e| Error::buffer_creation_failed(block_name, e))?;

        let block_index = unsafe { gl.get_uniform_block_index(shader.program, block_name) }
            .ok_or(Error::uniform_location_failed(block_name))?;

        unsafe {
            gl.uniform_block_binding(shader.program, block_index, binding_point);
            gl.bind_buffer_base(glow::UNIFORM_BUFFER, binding_point, Some(buffer));
        }

        Ok(Self { buffer, binding_point })
    }

    pub(crate) fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer_base(glow::UNIFORM_BUFFER, self.binding_point, Some(self.buffer)) };
    }

    pub(crate) fn unbind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer_base(glow::UNIFORM_BUFFER, self.binding_point, None) };
    }

    /// Replaces the block contents. `T` must be `#[repr(C)]` and padded to
    /// std140 rules; the structs in `hero_scene` pin this with align(16).
    pub(crate) fn upload<T>(&self, gl: &glow::Context, data: &T) {
        unsafe {
            gl.bind_buffer(glow::UNIFORM_BUFFER, Some(self.buffer));
            buffer_upload_struct(gl, glow::UNIFORM_BUFFER, data, glow::STATIC_DRAW);
            gl.bind_buffer(glow::UNIFORM_BUFFER, None);
        }
    }

    /// Deletes the buffer, releasing the GPU resource.
    pub(crate) fn delete(&self, gl: &glow::Context) {
        unsafe { gl.delete_buffer(self.buffer) };
    }
}
