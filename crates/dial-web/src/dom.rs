use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Create an element and cast it to the requested interface.
pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{tag}> is not the expected interface"))
}

/// Size the canvas backing store to `width x height` logical pixels scaled by
/// the device pixel ratio, and pin its CSS size so layout stays in logical
/// units.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    let dpr = device_pixel_ratio();
    canvas.set_width((width * dpr).round().max(1.0) as u32);
    canvas.set_height((height * dpr).round().max(1.0) as u32);

    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let _ = style.set_property("transform-origin", "top left");
}
