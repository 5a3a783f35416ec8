//! Result formatting: amplitude records and counts views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use entangle_hal::{Counts, StateVector};

use crate::histogram::render_histogram;
use crate::image::Image;
use crate::theme::Palette;

/// Amplitudes at or below this magnitude are dropped from formatted output.
pub const AMPLITUDE_THRESHOLD: f64 = 1e-10;

/// One basis state of a formatted state vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeRecord {
    /// Bitstring label (rightmost character is qubit 0).
    pub state: String,
    /// Real part of the amplitude.
    pub amplitude_real: f64,
    /// Imaginary part of the amplitude.
    pub amplitude_imag: f64,
    /// `|amplitude|`.
    pub magnitude: f64,
    /// `arg(amplitude)` in radians, in `(-π, π]`.
    pub phase: f64,
    /// `magnitude²`.
    pub probability: f64,
}

/// Format a state as amplitude records.
///
/// Entries with magnitude `<= 1e-10` are excluded; the rest are ordered by
/// descending probability. Equal probabilities keep basis-state order.
pub fn format_state(state: &StateVector) -> Vec<AmplitudeRecord> {
    let mut records: Vec<AmplitudeRecord> = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter_map(|(i, amp)| {
            let magnitude = amp.norm();
            (magnitude > AMPLITUDE_THRESHOLD).then(|| AmplitudeRecord {
                state: state.bitstring(i),
                amplitude_real: amp.re,
                amplitude_imag: amp.im,
                magnitude,
                phase: amp.arg(),
                probability: magnitude * magnitude,
            })
        })
        .collect();

    // sort_by is stable
    records.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    debug!(
        kept = records.len(),
        total = state.dim(),
        "Formatted state vector"
    );
    records
}

/// Counts together with their rendered histogram.
#[derive(Debug, Clone, Serialize)]
pub struct CountsView {
    /// Bar chart of the counts.
    pub histogram: Image,
    /// Raw counts, only realized outcomes.
    pub counts: Counts,
    /// Sum of all counts.
    pub total_shots: u64,
}

/// Render the histogram for a set of counts.
pub fn format_counts(counts: &Counts, palette: &Palette) -> CountsView {
    let svg = render_histogram(counts, "Measurement Results", palette);
    CountsView {
        histogram: Image::svg(&svg),
        counts: counts.clone(),
        total_shots: counts.total_shots(),
    }
}
