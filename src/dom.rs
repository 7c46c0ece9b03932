use crate::constants::{CANVAS_SELECTOR, COLOR_SRC_DATA_KEY, DEPTH_SRC_DATA_KEY};
use crate::core::{ResizePlan, Settings, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn find_effect_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .query_selector(CANVAS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Defaults, overridden by `data-color-src` / `data-depth-src` on the canvas.
pub fn settings_from_canvas(canvas: &web::HtmlCanvasElement) -> Settings {
    let data = canvas.dataset();
    Settings::with_paths(data.get(COLOR_SRC_DATA_KEY), data.get(DEPTH_SRC_DATA_KEY))
}

/// Size the canvas the way a renderer `setSize` + capped `setPixelRatio` does:
/// CSS size follows the viewport, the backing store is scaled by the ratio.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, plan: &ResizePlan) {
    canvas.set_width(plan.backing_width);
    canvas.set_height(plan.backing_height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", plan.viewport.width));
    _ = style.set_property("height", &format!("{}px", plan.viewport.height));
}
