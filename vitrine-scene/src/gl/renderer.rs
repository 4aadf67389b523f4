use crate::gl::context::GlState;

/// Per-call bundle handed through the [`Drawable`] lifecycle: the GL handle
/// plus the redundant-state cache shared by everything drawing this frame.
pub struct RenderContext<'a> {
    pub gl: &'a glow::Context,
    pub state: &'a mut GlState,
}

/// Render lifecycle for scene objects.
///
/// Split into three phases so a caller compositing several drawables can
/// batch state setup and teardown around the inner draw calls.
pub trait Drawable {
    /// Binds the program, buffers and per-frame state this object draws with.
    fn prepare(&self, context: &mut RenderContext);

    /// Issues the draw calls. Assumes `prepare` ran against the same context.
    fn draw(&self, context: &mut RenderContext);

    /// Unbinds what `prepare` bound so later passes start from a known state.
    fn cleanup(&self, context: &mut RenderContext);
}
