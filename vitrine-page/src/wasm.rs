use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::{app::FashionPage, config::PageConfig};

/// JavaScript wrapper around the page controller.
///
/// Thin `#[wasm_bindgen]` wrapper that delegates to [`FashionPage`].
#[wasm_bindgen]
pub struct VitrinePage {
    page: Option<FashionPage>,
}

#[wasm_bindgen]
impl VitrinePage {
    /// Mounts the page against the default selector contract.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<VitrinePage, JsValue> {
        Self::mount(PageConfig::default())
    }

    /// Mounts the page with selector and tuning overrides from a plain JS
    /// object; omitted fields keep their defaults.
    ///
    /// # Example
    /// ```javascript
    /// const page = VitrinePage.withConfig({ navbar: "#topbar", maxHeroSizePx: 512 });
    /// ```
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(config: JsValue) -> Result<VitrinePage, JsValue> {
        let config: PageConfig =
            from_value(config).map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
        Self::mount(config)
    }

    /// Pauses the animation scheduler; the hero scene keeps rendering its
    /// frozen pose.
    pub fn pause(&self) {
        if let Some(page) = &self.page {
            page.pause();
        }
    }

    /// Resumes a paused scheduler.
    pub fn resume(&self) {
        if let Some(page) = &self.page {
            page.resume();
        }
    }

    /// Tears the page down: frame loop, listeners, timers, GL resources.
    /// Further calls on this handle are no-ops.
    pub fn unmount(&mut self) {
        if let Some(page) = self.page.take() {
            page.unmount();
        }
    }
}

impl VitrinePage {
    fn mount(config: PageConfig) -> Result<VitrinePage, JsValue> {
        console_error_panic_hook::set_once();

        let page = FashionPage::mount(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(VitrinePage { page: Some(page) })
    }
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"vitrine WASM module loaded".into());
}
