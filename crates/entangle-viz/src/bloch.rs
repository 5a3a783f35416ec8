//! Bloch sphere rendering.

use std::fmt::Write;

use entangle_hal::StateVector;

use crate::error::{VizError, VizResult};
use crate::theme::{FONT, Palette};

const PANEL: f64 = 260.0;
const RADIUS: f64 = 96.0;
const TITLE_BAND: f64 = 36.0;

/// Render one Bloch sphere per qubit, side by side.
///
/// Each sphere shows the qubit's reduced Bloch vector, so entangled qubits draw
/// as short (or zero-length) arrows. Fails when the register is wider than
/// `max_qubits` or when a vector component is not finite.
pub fn render_bloch_multivector(
    state: &StateVector,
    max_qubits: usize,
    palette: &Palette,
) -> VizResult<String> {
    let n = state.num_qubits();
    if n > max_qubits {
        return Err(VizError::TooManyQubits {
            qubits: n,
            max: max_qubits,
        });
    }

    let vectors = (0..n)
        .map(|q| -> VizResult<[f64; 3]> {
            let v = state.reduced_bloch(q)?;
            if v.iter().all(|c| c.is_finite()) {
                Ok(v)
            } else {
                Err(VizError::NonFiniteState { qubit: q })
            }
        })
        .collect::<VizResult<Vec<_>>>()?;

    let width = PANEL * n.max(1) as f64;
    let height = PANEL + TITLE_BAND;
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

    for (q, v) in vectors.iter().enumerate() {
        draw_sphere(&mut svg, q, *v, PANEL * q as f64, palette);
    }

    writeln!(svg, "</svg>").ok();
    Ok(svg)
}

/// Oblique projection: x toward the viewer (down-left), y right, z up.
fn project(cx: f64, cy: f64, v: [f64; 3]) -> (f64, f64) {
    (
        cx + RADIUS * (v[1] - 0.4 * v[0]),
        cy + RADIUS * (0.3 * v[0] - v[2]),
    )
}

fn draw_sphere(svg: &mut String, qubit: usize, v: [f64; 3], x0: f64, palette: &Palette) {
    let cx = x0 + PANEL / 2.0;
    let cy = TITLE_BAND + PANEL / 2.0;

    writeln!(
        svg,
        r#"  <text x="{cx:.1}" y="24" font-size="15" font-weight="bold" fill="{}" text-anchor="middle">qubit {qubit}</text>"#,
        palette.title
    )
    .ok();
    writeln!(
        svg,
        r#"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{RADIUS}" fill="{}" fill-opacity="0.08" stroke="{}" stroke-width="1.5"/>"#,
        palette.bar, palette.grid
    )
    .ok();
    writeln!(
        svg,
        r#"  <ellipse cx="{cx:.1}" cy="{cy:.1}" rx="{RADIUS}" ry="{:.1}" fill="none" stroke="{}" stroke-dasharray="4 4"/>"#,
        RADIUS * 0.3,
        palette.grid
    )
    .ok();

    // Axes
    for axis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
        let neg = axis.map(|c: f64| -c);
        let (x1, y1) = project(cx, cy, neg);
        let (x2, y2) = project(cx, cy, axis);
        writeln!(
            svg,
            r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{}"/>"#,
            palette.axis
        )
        .ok();
    }
    for (label, point) in [
        ("|0⟩", [0.0, 0.0, 1.18]),
        ("|1⟩", [0.0, 0.0, -1.3]),
        ("x", [1.25, 0.0, 0.0]),
        ("y", [0.0, 1.15, 0.0]),
    ] {
        let (x, y) = project(cx, cy, point);
        writeln!(
            svg,
            r#"  <text x="{x:.1}" y="{y:.1}" font-size="13" fill="{}" text-anchor="middle">{label}</text>"#,
            palette.text
        )
        .ok();
    }

    // State vector
    let (tx, ty) = project(cx, cy, v);
    writeln!(
        svg,
        r#"  <line class="bloch-vector" x1="{cx:.1}" y1="{cy:.1}" x2="{tx:.1}" y2="{ty:.1}" stroke="{}" stroke-width="3"/>"#,
        palette.bar_edge
    )
    .ok();
    writeln!(
        svg,
        r#"  <circle cx="{tx:.1}" cy="{ty:.1}" r="5" fill="{}"/>"#,
        palette.bar_edge
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK;
    use num_complex::Complex64;

    #[test]
    fn test_one_sphere_per_qubit() {
        let svg = render_bloch_multivector(&StateVector::zero(3), 3, &DARK).unwrap();
        assert_eq!(svg.matches("class=\"bloch-vector\"").count(), 3);
        assert!(svg.contains(">qubit 2<"));
    }

    #[test]
    fn test_zero_state_points_up() {
        let svg = render_bloch_multivector(&StateVector::zero(1), 3, &DARK).unwrap();
        // |0⟩ tip sits one radius above the centre.
        let cy = TITLE_BAND + PANEL / 2.0;
        assert!(svg.contains(&format!(r#"y2="{:.1}" stroke="{}" stroke-width="3""#, cy - RADIUS, DARK.bar_edge)));
    }

    #[test]
    fn test_too_many_qubits() {
        let err = render_bloch_multivector(&StateVector::zero(4), 3, &DARK).unwrap_err();
        assert!(matches!(err, VizError::TooManyQubits { qubits: 4, max: 3 }));
    }

    #[test]
    fn test_non_finite_state() {
        let nan = Complex64::new(f64::NAN, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let state = StateVector::new(1, vec![nan, zero]).unwrap();
        let err = render_bloch_multivector(&state, 3, &DARK).unwrap_err();
        assert!(matches!(err, VizError::NonFiniteState { qubit: 0 }));
    }
}
