//! One on-screen dial: a canvas child of its container plus the core state
//! machine and event wiring behind it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use dial_core::{DialParams, RadialSlider, Viewport};

use crate::{dom, events, render, tutorial};

/// Construction options for one dial. The origin is normalized to the canvas
/// unit square.
#[derive(Clone, Copy, Debug)]
pub struct DialOptions {
    pub origin: DVec2,
    pub radius: f64,
    pub rgb: [u8; 3],
    pub min: f64,
    pub max: f64,
}

impl Default for DialOptions {
    fn default() -> Self {
        let params = DialParams::default();
        Self {
            origin: DVec2::splat(0.5),
            radius: params.radius,
            rgb: params.rgb,
            min: params.min,
            max: params.max,
        }
    }
}

impl DialOptions {
    fn params(&self) -> DialParams {
        DialParams {
            radius: self.radius,
            rgb: self.rgb,
            min: self.min,
            max: self.max,
        }
    }
}

/// Shared handles held by the widget and its event closures. Cloning is
/// cheap; every clone refers to the same dial.
#[derive(Clone)]
pub struct DialWiring {
    pub parent: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: Rc<RefCell<RadialSlider>>,
    pub output: Rc<RefCell<Option<web::HtmlInputElement>>>,
    pub hint: Rc<RefCell<tutorial::Hint>>,
    /// Latched by the first touchstart; hybrid devices fire both input APIs
    /// for the same gesture, so the mouse path retires permanently.
    pub touch_seen: Rc<Cell<bool>>,
}

pub struct Dial {
    wiring: DialWiring,
}

impl Dial {
    /// Build the canvas, wire the input handlers and draw the initial frame.
    pub fn new(parent: &web::HtmlElement, opts: DialOptions) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::create(&document, "canvas")?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("canvas 2d context: {e:?}"))?
            .ok_or_else(|| anyhow::anyhow!("canvas 2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("canvas context is not 2d"))?;
        parent
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("attach canvas: {e:?}"))?;

        // layout may not have run yet; the placeholder viewport is replaced
        // by the resize below or by the host's first resize() call
        let viewport = Viewport::new(
            parent.client_width() as f64,
            parent.client_height() as f64,
        )
        .unwrap_or_default();
        let state = Rc::new(RefCell::new(RadialSlider::new(
            opts.origin,
            viewport,
            opts.params(),
        )));

        let wiring = DialWiring {
            parent: parent.clone(),
            canvas,
            ctx,
            state,
            output: Rc::new(RefCell::new(None)),
            hint: Rc::new(RefCell::new(tutorial::Hint::default())),
            touch_seen: Rc::new(Cell::new(false)),
        };
        events::wire_contact_handlers(&wiring);

        let dial = Self { wiring };
        dial.resize();
        Ok(dial)
    }

    /// Re-read the container's layout size, resize the canvas backing store
    /// and re-apply the device-pixel-ratio transform (once per resize, never
    /// per frame), then redraw. Idempotent.
    pub fn resize(&self) {
        let width = self.wiring.parent.client_width() as f64;
        let height = self.wiring.parent.client_height() as f64;
        match Viewport::new(width, height) {
            Ok(viewport) => {
                self.wiring.state.borrow_mut().set_viewport(viewport);
                dom::sync_canvas_backing_size(&self.wiring.canvas, width, height);
                // setting the backing size reset the context transform
                let dpr = dom::device_pixel_ratio();
                let _ = self.wiring.ctx.scale(dpr, dpr);
            }
            Err(e) => log::warn!("[resize] skipped: {e}"),
        }
        update(&self.wiring);
    }

    /// Sink that receives the formatted value string on every update.
    pub fn set_output(&self, output: web::HtmlInputElement) {
        *self.wiring.output.borrow_mut() = Some(output);
        update(&self.wiring);
    }

    pub fn set_radius(&self, radius: f64) {
        self.wiring.state.borrow_mut().params.radius = radius;
        update(&self.wiring);
    }

    pub fn set_rgb(&self, rgb: [u8; 3]) {
        self.wiring.state.borrow_mut().params.rgb = rgb;
        update(&self.wiring);
    }

    pub fn set_range(&self, min: f64, max: f64) {
        {
            let mut state = self.wiring.state.borrow_mut();
            state.params.min = min;
            state.params.max = max;
        }
        update(&self.wiring);
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.wiring.state.borrow().value()
    }

    #[inline]
    pub fn value_text(&self) -> String {
        self.wiring.state.borrow().value_text()
    }

    #[inline]
    pub fn parent(&self) -> &web::HtmlElement {
        &self.wiring.parent
    }
}

/// Push the formatted value to the output sink and redraw the canvas.
pub fn update(w: &DialWiring) {
    let state = w.state.borrow();
    if let Some(output) = w.output.borrow().as_ref() {
        output.set_value(&state.value_text());
    }
    render::draw(&w.ctx, &state);
}
