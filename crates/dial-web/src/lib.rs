#![cfg(target_arch = "wasm32")]
pub mod constants;
pub mod dom;
pub mod events;
pub mod render;
pub mod tutorial;
pub mod widget;

use glam::DVec2;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::widget::{Dial, DialOptions};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dial-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

// Build the demo page: a container with three dials and a read-only value
// readout for the first one.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let container: web::HtmlElement = dom::create(&document, "div")?;
    container.set_id("container");
    let _ = container.class_list().add_1("dialContainer");

    // suppress mobile scrolling while dragging inside the container
    {
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    body.append_child(&container)
        .map_err(|e| anyhow::anyhow!("attach container: {e:?}"))?;

    let main = Dial::new(
        &container,
        DialOptions {
            origin: DVec2::new(0.5, 0.5),
            min: 0.0,
            max: 100.0,
            ..DialOptions::default()
        },
    )?;

    // value readout for the main dial
    let output: web::HtmlInputElement = dom::create(&document, "input")?;
    output.set_read_only(true);
    let _ = body.append_child(&output);
    main.set_output(output);

    let accent = [43, 212, 156];
    let lower = Dial::new(
        &container,
        DialOptions {
            origin: DVec2::new(0.1, 0.9),
            radius: 50.0,
            rgb: accent,
            ..DialOptions::default()
        },
    )?;
    let narrow = Dial::new(
        &container,
        DialOptions {
            origin: DVec2::new(0.9, 0.5),
            radius: 50.0,
            rgb: accent,
            min: 10.0,
            max: 30.0,
            ..DialOptions::default()
        },
    )?;

    let dials = Rc::new([main, lower, narrow]);

    // keep each hit radius proportional to the layout, then propagate the
    // resize
    let resize_all = {
        let dials = dials.clone();
        move || {
            for (dial, factor) in dials.iter().zip(constants::DEMO_RADIUS_FACTORS) {
                let parent = dial.parent();
                let min_dim = parent.client_width().min(parent.client_height()) as f64;
                dial.set_radius(min_dim * factor);
                dial.resize();
            }
        }
    };
    resize_all();

    let closure = Closure::wrap(Box::new(resize_all) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();

    Ok(())
}
