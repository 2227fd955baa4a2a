//! Canvas 2D rendering of a dial from its core state.

use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

use dial_core::{Phase, RadialSlider};

use crate::constants::{
    ACTIVE_ALPHA, FONT_SIZE_FACTOR, HANDLE_ARMED_STYLE, HANDLE_RADIUS_FACTOR, IDLE_ALPHA,
    ORIGIN_RING_WIDTH, RANGE_RING_WIDTH, TEXT_STYLE,
};

/// rgba() string for the widget color at the given alpha.
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

fn trace_arc(ctx: &web::CanvasRenderingContext2d, center: DVec2, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
}

/// Stroke a circle outline around `center` (canvas px).
pub fn stroke_arc(ctx: &web::CanvasRenderingContext2d, center: DVec2, radius: f64, style: &str) {
    ctx.save();
    ctx.set_stroke_style_str(style);
    trace_arc(ctx, center, radius);
    ctx.stroke();
    ctx.restore();
}

/// Fill a disc around `center` (canvas px).
pub fn fill_arc(ctx: &web::CanvasRenderingContext2d, center: DVec2, radius: f64, style: &str) {
    ctx.save();
    ctx.set_fill_style_str(style);
    trace_arc(ctx, center, radius);
    ctx.fill();
    ctx.restore();
}

/// Redraw the whole dial: origin ring with its value fill and text, and while
/// a contact is tracked, the range ring, handle disc and origin-to-handle
/// line.
pub fn draw(ctx: &web::CanvasRenderingContext2d, slider: &RadialSlider) {
    let size = slider.viewport().size();
    let origin = slider.origin_px();
    let radius = slider.params.radius;

    ctx.save();
    ctx.clear_rect(0.0, 0.0, size.x, size.y);

    let alpha = if slider.is_active() {
        ACTIVE_ALPHA
    } else {
        IDLE_ALPHA
    };
    let style = rgba(slider.params.rgb, alpha);

    // origin ring and the value fill inside it
    ctx.set_line_width(ORIGIN_RING_WIDTH);
    stroke_arc(ctx, origin, radius, &style);
    fill_arc(ctx, origin, radius * slider.value_norm(), &style);

    // centered value text, nudged down to sit on the middle
    ctx.set_fill_style_str(TEXT_STYLE);
    let font_size = radius * FONT_SIZE_FACTOR;
    ctx.set_font(&format!("{font_size}px Menlo"));
    ctx.set_text_align("center");
    let _ = ctx.fill_text_with_max_width(
        &slider.value_text(),
        origin.x,
        origin.y + font_size / 4.0,
        radius * 2.0,
    );

    if slider.is_active() {
        // full-range ring, pulled in so the stroke stays on-canvas
        ctx.set_line_width(RANGE_RING_WIDTH);
        stroke_arc(
            ctx,
            origin,
            slider.range_px() - RANGE_RING_WIDTH * 2.0,
            &style,
        );

        // handle disc, grey until actually grabbed
        let extent = slider.extent_px();
        let handle_style: &str = if slider.phase() == Phase::Grabbed {
            &style
        } else {
            HANDLE_ARMED_STYLE
        };
        fill_arc(ctx, extent, radius * HANDLE_RADIUS_FACTOR, handle_style);

        // origin-to-handle line
        ctx.set_stroke_style_str(&style);
        ctx.begin_path();
        ctx.move_to(origin.x, origin.y);
        ctx.line_to(extent.x, extent.y);
        ctx.stroke();
    }

    ctx.restore();
}
