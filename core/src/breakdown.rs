//! Step-by-step breakdown of the modulo-11 checksum for display.
//!
//! The original web version recomputed weights independently of the
//! calculator; here both sides share `dv::weights()` and the remainder
//! mapping, so the breakdown's digit can never diverge from
//! [`compute`](crate::dv::compute).

use crate::body::Body;
use crate::dv::{self, Dv};

/// One digit's contribution to the checksum, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    /// 1-based position from the left.
    pub position: usize,
    pub digit: u32,
    pub weight: u32,
    pub product: u32,
    /// Running sum of products up to and including this row.
    pub running: u32,
}

/// Full audit trail of a checksum computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub rows: Vec<BreakdownRow>,
    pub sum: u32,
    pub sum_mod: u32,
    pub remainder: u32,
    pub dv: Dv,
}

impl Breakdown {
    #[must_use]
    pub fn of(body: &Body) -> Self {
        let mut weights: Vec<u32> = dv::weights().take(body.len()).collect();
        weights.reverse();

        let mut running = 0;
        let rows: Vec<BreakdownRow> = body
            .digits()
            .zip(weights)
            .enumerate()
            .map(|(index, (digit, weight))| {
                let product = digit * weight;
                running += product;
                BreakdownRow {
                    position: index + 1,
                    digit,
                    weight,
                    product,
                    running,
                }
            })
            .collect();

        let sum = dv::weighted_sum(body);
        let sum_mod = sum % 11;
        let remainder = 11 - sum_mod;
        Self {
            rows,
            sum,
            sum_mod,
            remainder,
            dv: dv::compute(body),
        }
    }
}
