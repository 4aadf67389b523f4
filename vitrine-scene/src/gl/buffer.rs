use std::slice;

use glow::HasContext;

/// Uploads a slice of plain-old-data elements to the bound GL buffer.
///
/// # Safety
/// `T` must be fully initialized plain-old-data with a `#[repr(C)]` or
/// `#[repr(transparent)]` layout; the raw byte view goes straight to the
/// driver, padding included.
pub(super) unsafe fn buffer_upload_array<T>(
    gl: &glow::Context,
    target: u32,
    data: &[T],
    usage: u32,
) {
    unsafe {
        let bytes = slice::from_raw_parts(data.as_ptr().cast::<u8>(), size_of_val(data));
        gl.buffer_data_u8_slice(target, bytes, usage);
    }
}

/// Uploads a single struct, typically a std140 uniform block.
///
/// # Safety
/// Same layout requirements as [`buffer_upload_array`].
pub(super) unsafe fn buffer_upload_struct<T>(gl: &glow::Context, target: u32, data: &T, usage: u32) {
    unsafe { buffer_upload_array(gl, target, slice::from_ref(data), usage) }
}
