//! Touch and mouse wiring for one dial.
//!
//! Start events listen on the container so overlapping dials stay
//! independent; move and end events listen on the window so a drag keeps
//! working when the contact leaves the canvas. The core state machine decides
//! what every contact means; this module only translates events into
//! canvas-relative contacts.

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use dial_core::{Contact, ContactId, Phase};

use crate::tutorial;
use crate::widget::{self, DialWiring};

// Event-to-canvas coordinate helpers. Positions stay in CSS pixels relative
// to the canvas top-left; the core never sees client coordinates.

#[inline]
pub fn touch_canvas_px(touch: &web::Touch, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        touch.client_x() as f64 - rect.left(),
        touch.client_y() as f64 - rect.top(),
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

fn changed_contacts(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Vec<Contact> {
    let touches = ev.changed_touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Contact::new(ContactId::Touch(t.identifier()), touch_canvas_px(&t, canvas)))
        .collect()
}

pub fn wire_contact_handlers(w: &DialWiring) {
    wire_touch_start(w);
    wire_touch_move(w);
    wire_touch_end(w);
    wire_mouse(w);
}

// Shared post-start bookkeeping: surface the new value and, when the handle
// was left away from the origin, offer the tutorial hint.
fn begin_interaction(w: &DialWiring) {
    widget::update(w);
    let state = w.state.borrow();
    log::info!("[input] armed by {:?}", state.active_contact());
    let parked_away =
        state.extent().x != state.origin().x && state.extent().y != state.origin().y;
    if parked_away {
        tutorial::show(
            &mut w.hint.borrow_mut(),
            &w.parent,
            state.origin_px(),
            state.extent_px(),
        );
    }
}

// Dismiss the hint the moment the handle is actually picked up.
fn note_grab(w: &DialWiring, before: Phase) {
    if before != Phase::Grabbed && w.state.borrow().phase() == Phase::Grabbed {
        log::info!("[input] handle grabbed");
        tutorial::dismiss(&mut w.hint.borrow_mut(), true);
    }
}

// Shared release bookkeeping: the hint goes away un-earned and the idle frame
// hides the handle.
fn end_interaction(w: &DialWiring) {
    log::info!("[input] released");
    tutorial::dismiss(&mut w.hint.borrow_mut(), false);
    widget::update(w);
}

fn wire_touch_start(w: &DialWiring) {
    let w = w.clone();
    let parent = w.parent.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        w.touch_seen.set(true);
        let contacts = changed_contacts(&ev, &w.canvas);
        if w.state.borrow_mut().contact_start(&contacts) {
            begin_interaction(&w);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = parent.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_touch_move(w: &DialWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut consumed = false;
        for contact in changed_contacts(&ev, &w.canvas) {
            let before = w.state.borrow().phase();
            if w.state.borrow_mut().contact_move(contact) {
                consumed = true;
                note_grab(&w, before);
            }
        }
        if consumed {
            widget::update(&w);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch_end(w: &DialWiring) {
    // a contact the browser revokes must release the dial exactly like a
    // normal lift-off, so touchcancel shares the handler
    for kind in ["touchend", "touchcancel"] {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let touches = ev.changed_touches();
            for i in 0..touches.length() {
                let Some(touch) = touches.item(i) else {
                    continue;
                };
                if w.state
                    .borrow_mut()
                    .contact_end(ContactId::Touch(touch.identifier()))
                {
                    end_interaction(&w);
                }
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_mouse(w: &DialWiring) {
    // mousedown on the container
    {
        let w = w.clone();
        let parent = w.parent.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if w.touch_seen.get() {
                return;
            }
            ev.prevent_default();
            let contact = Contact::new(ContactId::Mouse, mouse_canvas_px(&ev, &w.canvas));
            if w.state.borrow_mut().contact_start(&[contact]) {
                begin_interaction(&w);
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = parent.add_event_listener_with_callback_and_add_event_listener_options(
            "mousedown",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    // mousemove on the window
    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if w.touch_seen.get() {
                return;
            }
            let contact = Contact::new(ContactId::Mouse, mouse_canvas_px(&ev, &w.canvas));
            let before = w.state.borrow().phase();
            if w.state.borrow_mut().contact_move(contact) {
                note_grab(&w, before);
                widget::update(&w);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // mouseup on the window
    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            if w.touch_seen.get() {
                return;
            }
            if w.state.borrow_mut().contact_end(ContactId::Mouse) {
                end_interaction(&w);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ =
                window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
