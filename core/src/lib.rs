//! Core domain logic for rutero - no IO, no async.
//!
//! Everything here is a pure function over a RUT numeric body:
//! sanitization, the modulo-11 verification digit, thousands grouping,
//! and the step-by-step breakdown shown in the UI.

mod body;
mod breakdown;
mod dv;
mod format;

pub use body::{Body, BodyError, MAX_BODY_LEN, sanitize};
pub use breakdown::{Breakdown, BreakdownRow};
pub use dv::{Dv, compute, compute_str};
pub use format::{format_rut, group_thousands};
