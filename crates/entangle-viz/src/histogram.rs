//! Measurement histogram rendering.

use std::fmt::Write;

use entangle_hal::Counts;

use crate::theme::{FONT, Palette};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 80.0;
const Y_TICKS: u32 = 5;

/// Render a bar chart of counts per bitstring, bars in ascending bitstring order.
///
/// The output is a deterministic function of `counts` and `title`.
pub fn render_histogram(counts: &Counts, title: &str, palette: &Palette) -> String {
    let bars = counts.sorted_by_bitstring();
    let max = bars.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let (y_max, step) = axis_scale(max);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let y_of = |v: f64| baseline - v / y_max * plot_h;

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" font-family="{FONT}">"#
    )
    .ok();
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    )
    .ok();

    // Grid and y ticks
    let mut tick = 0.0;
    while tick <= y_max + f64::EPSILON {
        let y = y_of(tick);
        writeln!(
            svg,
            r#"  <line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-opacity="0.1"/>"#,
            MARGIN_LEFT + plot_w,
            palette.grid
        )
        .ok();
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="12" fill="{}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            palette.text,
            tick as u64
        )
        .ok();
        tick += step;
    }

    // Bars
    if !bars.is_empty() {
        let slot = plot_w / bars.len() as f64;
        let bar_w = slot * 0.7;
        let rotate = bars.len() > 16;
        for (i, &(bitstring, n)) in bars.iter().enumerate() {
            let cx = MARGIN_LEFT + slot * (i as f64 + 0.5);
            let top = y_of(n as f64);
            writeln!(
                svg,
                r#"  <rect x="{:.1}" y="{top:.1}" width="{bar_w:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="1.5"/>"#,
                cx - bar_w / 2.0,
                baseline - top,
                palette.bar,
                palette.bar_edge
            )
            .ok();
            writeln!(
                svg,
                r#"  <text x="{cx:.1}" y="{:.1}" font-size="11" fill="{}" text-anchor="middle">{n}</text>"#,
                top - 6.0,
                palette.text
            )
            .ok();
            if rotate {
                writeln!(
                    svg,
                    r#"  <text x="{cx:.1}" y="{:.1}" font-size="12" fill="{}" text-anchor="end" transform="rotate(-45 {cx:.1} {:.1})">{bitstring}</text>"#,
                    baseline + 16.0,
                    palette.text,
                    baseline + 16.0
                )
                .ok();
            } else {
                writeln!(
                    svg,
                    r#"  <text x="{cx:.1}" y="{:.1}" font-size="12" fill="{}" text-anchor="middle">{bitstring}</text>"#,
                    baseline + 18.0,
                    palette.text
                )
                .ok();
            }
        }
    }

    // Axes: left and bottom spines only
    writeln!(
        svg,
        r#"  <line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="{}"/>"#,
        palette.axis
    )
    .ok();
    writeln!(
        svg,
        r#"  <line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{:.1}" y2="{baseline}" stroke="{}"/>"#,
        MARGIN_LEFT + plot_w,
        palette.axis
    )
    .ok();

    // Labels
    writeln!(
        svg,
        r#"  <text x="{:.1}" y="36" font-size="16" font-weight="bold" fill="{}" text-anchor="middle">{title}</text>"#,
        WIDTH / 2.0,
        palette.title
    )
    .ok();
    writeln!(
        svg,
        r#"  <text x="{:.1}" y="{:.1}" font-size="13" fill="{}" text-anchor="middle">Quantum State</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 20.0,
        palette.text
    )
    .ok();
    writeln!(
        svg,
        r#"  <text x="24" y="{:.1}" font-size="13" fill="{}" text-anchor="middle" transform="rotate(-90 24 {:.1})">Counts</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        palette.text,
        MARGIN_TOP + plot_h / 2.0
    )
    .ok();

    writeln!(svg, "</svg>").ok();
    svg
}

/// Y-axis top and tick step: a 1/2/5 × 10^k step with the top on a tick.
fn axis_scale(max: u64) -> (f64, f64) {
    if max == 0 {
        return (1.0, 1.0);
    }
    let raw = max as f64 / f64::from(Y_TICKS);
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude)
        .max(1.0);
    ((max as f64 / step).ceil() * step, step)
}
