use glow::HasContext;

/// Capabilities this renderer ever toggles.
const TRACKED_CAPS: [u32; 3] = [glow::BLEND, glow::DEPTH_TEST, glow::CULL_FACE];

/// Cache over the GL state the hero scene touches, skipping redundant calls.
///
/// The scene redraws every animation frame with a mostly constant pipeline,
/// so each setter compares against the last written value and only crosses
/// into the driver on change.
#[derive(Debug)]
pub struct GlState {
    /// Last written viewport as `[x, y, width, height]`.
    viewport: [i32; 4],
    clear_color: [f32; 4],
    /// Last written `(src_factor, dst_factor)` pair.
    blend_func: (u32, u32),
    /// Enable flags, indexed like `TRACKED_CAPS`.
    enabled_caps: [bool; TRACKED_CAPS.len()],
}

impl Default for GlState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlState {
    /// Starts from the GL default state of a fresh context.
    pub fn new() -> Self {
        Self {
            viewport: [0, 0, 0, 0],
            clear_color: [0.0, 0.0, 0.0, 0.0],
            blend_func: (glow::ONE, glow::ZERO),
            enabled_caps: [false; TRACKED_CAPS.len()],
        }
    }

    /// Sets the viewport if it differs from the cached one.
    pub fn viewport(
        &mut self,
        gl: &glow::Context,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> &mut Self {
        let next = [x, y, width, height];
        if self.viewport != next {
            unsafe { gl.viewport(x, y, width, height) };
            self.viewport = next;
        }
        self
    }

    /// Sets the clear color if it differs from the cached one.
    pub fn clear_color(&mut self, gl: &glow::Context, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        let next = [r, g, b, a];
        if self.clear_color != next {
            unsafe { gl.clear_color(r, g, b, a) };
            self.clear_color = next;
        }
        self
    }

    /// Sets the blend function if it differs from the cached one.
    pub fn blend_func(&mut self, gl: &glow::Context, src: u32, dst: u32) -> &mut Self {
        if self.blend_func != (src, dst) {
            unsafe { gl.blend_func(src, dst) };
            self.blend_func = (src, dst);
        }
        self
    }

    /// Enables or disables a capability. Untracked caps pass straight through.
    pub fn set_capability(&mut self, gl: &glow::Context, cap: u32, enable: bool) -> &mut Self {
        let Some(idx) = TRACKED_CAPS.iter().position(|&c| c == cap) else {
            unsafe {
                if enable {
                    gl.enable(cap);
                } else {
                    gl.disable(cap);
                }
            }
            return self;
        };

        if self.enabled_caps[idx] != enable {
            unsafe {
                if enable {
                    gl.enable(cap);
                } else {
                    gl.disable(cap);
                }
            }
            self.enabled_caps[idx] = enable;
        }
        self
    }

    /// Returns tracked capabilities and the blend function to GL defaults.
    ///
    /// Viewport and clear color stay as-is; they track the canvas rather
    /// than any draw pass.
    pub fn reset(&mut self, gl: &glow::Context) {
        if self.blend_func != (glow::ONE, glow::ZERO) {
            unsafe { gl.blend_func(glow::ONE, glow::ZERO) };
            self.blend_func = (glow::ONE, glow::ZERO);
        }

        for (idx, enabled) in self.enabled_caps.iter_mut().enumerate() {
            if *enabled {
                unsafe { gl.disable(TRACKED_CAPS[idx]) };
                *enabled = false;
            }
        }
    }
}
