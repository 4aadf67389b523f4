use vitrine_scene::{GlState, GlslVersion, HeroModel, HeroScene};
use web_sys::{Element, HtmlCanvasElement};

use crate::{error::Error, js};

/// Hero scene mounted into its page container.
///
/// Construction is the only fallible step; frame and resize calls never
/// fail. When the container is missing from the page the stage is never
/// built and every dependent callback stays unwired.
pub(crate) struct HeroStage {
    gl: glow::Context,
    state: GlState,
    canvas: HtmlCanvasElement,
    container: Element,
    scene: HeroScene,
}

impl HeroStage {
    /// Mounts the scene into the element at `selector`. `Ok(None)` means
    /// the page has no such container and the subsystem stays disabled.
    pub(crate) fn mount(selector: &str, max_size_px: i32) -> Result<Option<Self>, Error> {
        let Some(container) = js::try_query(selector) else {
            return Ok(None);
        };
        let canvas = js::create_canvas_in(&container)?;
        let gl = js::create_glow_context(&canvas)?;

        let scene = HeroScene::new(
            &gl,
            &HeroModel::sneaker(),
            max_size_px,
            max_size_px,
            &GlslVersion::Es300,
        )?;

        let stage = Self {
            gl,
            state: GlState::new(),
            canvas,
            container,
            scene,
        };
        stage.sync_canvas();
        Ok(Some(stage))
    }

    /// Advances the pose when `animate` is set, then renders. Rendering is
    /// unconditional so the object stays visible while loading holds the
    /// pose frozen.
    pub(crate) fn frame(&mut self, dt: f32, animate: bool) {
        self.scene.advance(dt, animate);
        self.scene.render(&self.gl, &mut self.state);
    }

    /// Refits the square canvas to the container, capped at the maximum
    /// dimension.
    pub(crate) fn resize(&mut self) {
        let width = js::as_html(&self.container)
            .map(|html| html.offset_width())
            .unwrap_or_else(|| self.container.client_width());

        let before = self.scene.size();
        self.scene.resize(&self.gl, width);
        if self.scene.size() != before {
            self.sync_canvas();
        }
    }

    /// Releases the GPU resources and detaches the canvas.
    pub(crate) fn unmount(self) {
        self.scene.delete(&self.gl);
        self.canvas.remove();
    }

    /// Matches the canvas backing store and CSS box to the scene size.
    fn sync_canvas(&self) {
        let size = self.scene.size();
        self.canvas.set_width(size as u32);
        self.canvas.set_height(size as u32);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{size}px"));
        let _ = style.set_property("height", &format!("{size}px"));
    }
}
