//! API endpoint handlers.

pub mod health;
pub mod quantum;
pub mod root;
pub mod status;
