// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Cap, Join};
use peniko::Color;

use crate::{DrawOp, StateOp, Surface, SurfaceState};

/// Font size used for text labels, in view pixels.
const FONT_SIZE: f32 = 10.0;

/// A recording surface that exports SVG.
///
/// Meant for debugging and headless snapshots rather than faithful rendering:
/// text uses a generic monospace font and strokes map directly onto SVG
/// stroke attributes.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    state: SurfaceState,
    ops: Vec<(DrawOp, SurfaceState)>,
}

impl SvgSurface {
    /// Clears the recorded draws while keeping the current state.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Returns the number of recorded draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Export the recorded draws as an SVG document.
    ///
    /// `width`/`height` are used both as the SVG `width`/`height` attributes and to set
    /// `viewBox="0 0 width height"`. The background is black so the editor's light
    /// palette stays readable.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        let _ = write!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#000000\"/>"
        );
        for (op, state) in &self.ops {
            write_draw_op(&mut out, op, state);
        }
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetColor(color) => self.state.color = color,
            StateOp::SetStroke(stroke) => self.state.stroke = stroke,
        }
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push((op, self.state.clone()));
    }
}

fn write_draw_op(out: &mut String, op: &DrawOp, state: &SurfaceState) {
    match op {
        DrawOp::StrokeLine(line) => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                fmt_f64(line.p0.x),
                fmt_f64(line.p0.y),
                fmt_f64(line.p1.x),
                fmt_f64(line.p1.y),
                stroke_attrs(state)
            );
        }
        DrawOp::StrokeRect(rect) => {
            let rect = rect.abs();
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\"{}/>",
                fmt_f64(rect.x0),
                fmt_f64(rect.y0),
                fmt_f64(rect.width()),
                fmt_f64(rect.height()),
                stroke_attrs(state)
            );
        }
        DrawOp::Text { origin, text } => {
            let (rgb, alpha) = color_to_svg(state.color);
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"{}\" fill=\"{rgb}\"",
                fmt_f64(origin.x),
                fmt_f64(origin.y),
                fmt_f32(FONT_SIZE)
            );
            if alpha < 1.0 {
                let _ = write!(out, " fill-opacity=\"{}\"", fmt_f32(alpha));
            }
            let _ = write!(out, ">{}</text>", escape_text(text));
        }
    }
}

fn stroke_attrs(state: &SurfaceState) -> String {
    let (rgb, alpha) = color_to_svg(state.color);
    let stroke = &state.stroke;
    let mut out = format!(
        " stroke=\"{rgb}\" stroke-width=\"{}\"",
        fmt_f64(stroke.width)
    );
    if alpha < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f32(alpha));
    }
    let _ = write!(out, " stroke-linecap=\"{}\"", cap_svg(stroke.start_cap));
    let _ = write!(out, " stroke-linejoin=\"{}\"", join_svg(stroke.join));
    if !stroke.dash_pattern.is_empty() {
        out.push_str(" stroke-dasharray=\"");
        for (i, v) in stroke.dash_pattern.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&fmt_f64(*v));
        }
        out.push('"');
    }
    if stroke.dash_offset != 0.0 {
        let _ = write!(
            out,
            " stroke-dashoffset=\"{}\"",
            fmt_f64(stroke.dash_offset)
        );
    }
    out
}

fn cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn join_svg(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_f32(v: f32) -> String {
    fmt_f64(f64::from(v))
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if !v.is_finite() {
        return format!("{v}");
    }
    // Integral values below 2^53 print without a fraction.
    if (-9.0e15..9.0e15).contains(&v) {
        #[allow(clippy::cast_possible_truncation, reason = "range checked above")]
        let i = v as i64;
        #[allow(clippy::cast_precision_loss, reason = "range checked above")]
        let back = i as f64;
        if back == v {
            return format!("{i}");
        }
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
