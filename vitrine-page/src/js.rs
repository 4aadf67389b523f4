use js_sys::wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Window};

use crate::error::Error;

pub(crate) fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::window_not_found())
}

pub(crate) fn document() -> Result<Document, Error> {
    window()?.document().ok_or(Error::document_not_found())
}

/// Optional lookup. Missing (or malformed) selectors yield `None`, which
/// callers treat as "skip this feature".
pub(crate) fn try_query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// All elements matching `selector`, in document order. Lookup failures
/// collapse to an empty list.
pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Like [`query_all`], scoped to `parent`'s subtree.
pub(crate) fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Styled view of an element. `None` for non-HTML elements such as SVG.
pub(crate) fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Creates a `<canvas>` and attaches it to `parent`.
pub(crate) fn create_canvas_in(parent: &Element) -> Result<HtmlCanvasElement, Error> {
    let canvas = document()?
        .create_element("canvas")
        .map_err(|_| Error::element_creation_failed("canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::element_creation_failed("canvas"))?;
    parent
        .append_child(&canvas)
        .map_err(|_| Error::node_attach_failed("hero canvas"))?;
    Ok(canvas)
}

pub(crate) fn get_webgl2_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    canvas
        .get_context("webgl2")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}

/// Wraps the canvas's WebGL2 context in a glow context.
#[cfg(target_arch = "wasm32")]
pub(crate) fn create_glow_context(canvas: &HtmlCanvasElement) -> Result<glow::Context, Error> {
    let webgl2_ctx = get_webgl2_context(canvas)?;
    Ok(glow::Context::from_webgl2_context(webgl2_ctx))
}

/// Native stub so clippy and the host-side tests can compile this module.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn create_glow_context(_canvas: &HtmlCanvasElement) -> Result<glow::Context, Error> {
    unimplemented!("create_glow_context is only available on wasm32")
}

/// Current vertical scroll offset, or 0 when unavailable.
pub(crate) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels, or 0 when unavailable.
pub(crate) fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Jumps the document scroll position. Animated scrolling drives this once
/// per sampled frame.
pub(crate) fn scroll_to(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}
