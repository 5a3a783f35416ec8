//! Circuit diagram rendering.

use std::fmt::Write;

use entangle_ir::{Circuit, Instruction, InstructionKind, StandardGate};

use crate::theme::{FONT, Palette};

const WIRE_GAP: f64 = 56.0;
const COLUMN: f64 = 64.0;
const LEFT: f64 = 64.0;
const TOP: f64 = 40.0;
const BOX: f64 = 36.0;

/// Render a circuit as an SVG wire diagram.
///
/// One horizontal wire per qubit (qubit 0 on top), instructions placed by
/// [`Circuit::layers`]. Instructions touching qubits outside the register are
/// not drawn.
pub fn render_circuit(circuit: &Circuit, palette: &Palette) -> String {
    let n = circuit.num_qubits();
    let layers = circuit.layers();
    let width = LEFT + COLUMN * layers.len().max(1) as f64 + 32.0;
    let height = TOP * 2.0 + WIRE_GAP * n.saturating_sub(1) as f64;

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="{FONT}">"#
    )
    .ok();
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    )
    .ok();

    for q in 0..n {
        let y = wire_y(q);
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="14" fill="{}" text-anchor="end">q{q}</text>"#,
            LEFT - 16.0,
            y + 5.0,
            palette.text
        )
        .ok();
        writeln!(
            svg,
            r#"  <line x1="{LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="1.5"/>"#,
            width - 16.0,
            palette.axis
        )
        .ok();
    }

    for (col, layer) in layers.iter().enumerate() {
        let x = LEFT + COLUMN * (col as f64 + 0.5);
        for &idx in layer {
            let inst = &circuit.instructions()[idx];
            if inst.qubits.iter().all(|q| q.index() < n) {
                draw_instruction(&mut svg, inst, x, palette);
            }
        }
    }

    writeln!(svg, "</svg>").ok();
    svg
}

fn wire_y(qubit: usize) -> f64 {
    TOP + WIRE_GAP * qubit as f64
}

fn draw_instruction(svg: &mut String, inst: &Instruction, x: f64, palette: &Palette) {
    let ys: Vec<f64> = inst.qubits.iter().map(|q| wire_y(q.index())).collect();
    match (&inst.kind, ys.as_slice()) {
        (InstructionKind::Measure, &[y]) => draw_meter(svg, x, y, palette),
        (InstructionKind::Gate(StandardGate::CX), &[c, t]) => {
            draw_connector(svg, x, c, t, palette);
            draw_dot(svg, x, c, palette);
            draw_target(svg, x, t, palette);
        }
        (InstructionKind::Gate(StandardGate::CZ), &[c, t]) => {
            draw_connector(svg, x, c, t, palette);
            draw_dot(svg, x, c, palette);
            draw_dot(svg, x, t, palette);
        }
        (InstructionKind::Gate(StandardGate::Swap), &[a, b]) => {
            draw_connector(svg, x, a, b, palette);
            draw_cross(svg, x, a, palette);
            draw_cross(svg, x, b, palette);
        }
        (InstructionKind::Gate(gate), &[y]) => draw_box(svg, x, y, gate.label(), palette),
        _ => {}
    }
}

fn draw_box(svg: &mut String, x: f64, y: f64, label: &str, palette: &Palette) {
    writeln!(
        svg,
        r#"  <rect x="{:.1}" y="{:.1}" width="{BOX}" height="{BOX}" rx="4" fill="{}" stroke="{}" stroke-width="1.5"/>"#,
        x - BOX / 2.0,
        y - BOX / 2.0,
        palette.bar,
        palette.bar_edge
    )
    .ok();
    writeln!(
        svg,
        r#"  <text x="{x:.1}" y="{:.1}" font-size="16" font-weight="bold" fill="{}" text-anchor="middle">{label}</text>"#,
        y + 6.0,
        palette.background
    )
    .ok();
}

fn draw_connector(svg: &mut String, x: f64, y1: f64, y2: f64, palette: &Palette) {
    writeln!(
        svg,
        r#"  <line x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="{}" stroke-width="2"/>"#,
        palette.bar
    )
    .ok();
}

fn draw_dot(svg: &mut String, x: f64, y: f64, palette: &Palette) {
    writeln!(
        svg,
        r#"  <circle cx="{x:.1}" cy="{y:.1}" r="6" fill="{}"/>"#,
        palette.bar
    )
    .ok();
}

fn draw_target(svg: &mut String, x: f64, y: f64, palette: &Palette) {
    let r = 13.0;
    writeln!(
        svg,
        r#"  <circle cx="{x:.1}" cy="{y:.1}" r="{r}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        palette.background, palette.bar
    )
    .ok();
    writeln!(
        svg,
        r#"  <path d="M {:.1} {y:.1} H {:.1} M {x:.1} {:.1} V {:.1}" stroke="{}" stroke-width="2"/>"#,
        x - r,
        x + r,
        y - r,
        y + r,
        palette.bar
    )
    .ok();
}

fn draw_cross(svg: &mut String, x: f64, y: f64, palette: &Palette) {
    let d = 8.0;
    writeln!(
        svg,
        r#"  <path d="M {:.1} {:.1} L {:.1} {:.1} M {:.1} {:.1} L {:.1} {:.1}" stroke="{}" stroke-width="2.5"/>"#,
        x - d,
        y - d,
        x + d,
        y + d,
        x - d,
        y + d,
        x + d,
        y - d,
        palette.bar
    )
    .ok();
}

fn draw_meter(svg: &mut String, x: f64, y: f64, palette: &Palette) {
    let half = BOX / 2.0;
    writeln!(
        svg,
        r#"  <rect x="{:.1}" y="{:.1}" width="{BOX}" height="{BOX}" rx="4" fill="{}" stroke="{}" stroke-width="1.5"/>"#,
        x - half,
        y - half,
        palette.axis,
        palette.grid
    )
    .ok();
    // Dial arc and needle
    writeln!(
        svg,
        r#"  <path d="M {:.1} {:.1} A 11 11 0 0 1 {:.1} {:.1} M {x:.1} {:.1} L {:.1} {:.1}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        x - 11.0,
        y + 6.0,
        x + 11.0,
        y + 6.0,
        y + 6.0,
        x + 8.0,
        y - 9.0,
        palette.text
    )
    .ok();
}
