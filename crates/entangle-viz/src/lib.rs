//! Entangle Result Formatting and Rendering
//!
//! Turns raw backend output into what the HTTP layer returns:
//!
//! - [`format_state`]: amplitude records with magnitude, phase and probability,
//!   negligible entries dropped, ordered by descending probability
//! - [`format_counts`]: raw counts plus a rendered histogram
//! - [`render_circuit`], [`render_histogram`], [`render_bloch_multivector`]: SVG figures
//! - [`Image`]: base64 transport encoding for figures embedded in JSON
//!
//! All figures use the [`DARK`] palette unless another [`Palette`] is passed.
//!
//! # Example
//!
//! ```rust
//! use entangle_hal::StateVector;
//! use entangle_viz::format_state;
//!
//! let records = format_state(&StateVector::zero(2));
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].state, "00");
//! ```

pub mod bloch;
pub mod circuit;
pub mod error;
pub mod format;
pub mod histogram;
pub mod image;
pub mod theme;

pub use bloch::render_bloch_multivector;
pub use circuit::render_circuit;
pub use error::{VizError, VizResult};
pub use format::{AMPLITUDE_THRESHOLD, AmplitudeRecord, CountsView, format_counts, format_state};
pub use histogram::render_histogram;
pub use image::{Image, SVG_FORMAT, SVG_MIME};
pub use theme::{DARK, Palette};
