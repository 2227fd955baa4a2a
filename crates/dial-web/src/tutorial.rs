//! One-shot "grab the handle" hint.
//!
//! Shown when an interaction starts while the handle is parked away from the
//! origin. The element glides from the origin to the handle via a CSS
//! transition kicked off on the next animation frame; fire-and-forget, no
//! cancellation beyond removing the element.

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HINT_OFFSET_X, HINT_OFFSET_Y, HINT_TEXT, HINT_WIDTH_PX};
use crate::dom;

#[derive(Default)]
pub struct Hint {
    el: Option<web::HtmlElement>,
    /// Set once the user grabs the handle while the hint is up; the hint
    /// never shows again afterwards.
    earned: bool,
}

/// Show the hint at `from` and let it glide to just beside `to` (both canvas
/// px).
pub fn show(hint: &mut Hint, parent: &web::HtmlElement, from: DVec2, to: DVec2) {
    if hint.earned || hint.el.is_some() {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(el) = dom::create::<web::HtmlElement>(&document, "div") else {
        return;
    };

    let from = from.round();
    let style = el.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("width", &format!("{HINT_WIDTH_PX}px"));
    let _ = style.set_property("left", &format!("{}px", from.x));
    let _ = style.set_property("top", &format!("{}px", from.y));
    el.set_text_content(Some(HINT_TEXT));
    let _ = parent.append_child(&el);

    // commit the start position this frame, then transition on the next
    let end = to.round() + DVec2::new(HINT_OFFSET_X, HINT_OFFSET_Y);
    let el_move = el.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let style = el_move.style();
        let _ = style.set_property("transition", "left 1s ease-out 0.1s, top 1s ease-out 0.1s");
        let _ = style.set_property("left", &format!("{}px", end.x));
        let _ = style.set_property("top", &format!("{}px", end.y));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
    closure.forget();

    hint.el = Some(el);
}

/// Remove the hint element. `earned` marks the tutorial as completed so it
/// never shows again.
pub fn dismiss(hint: &mut Hint, earned: bool) {
    if let Some(el) = hint.el.take() {
        el.remove();
    }
    hint.earned = hint.earned || earned;
}
