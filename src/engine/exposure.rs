use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine::seed;
use crate::types::PositionType;

pub const MIN_PROTOCOLS: usize = 3;
pub const MAX_PROTOCOLS: usize = 6;
pub const MIN_TOTAL_VALUE_USD: f64 = 8_000.0;
pub const MAX_TOTAL_VALUE_USD: f64 = 450_000.0;

/// Minimum percentage points reserved per selected protocol.
const MIN_ALLOCATION_PCT: f64 = 5.0;

/// One synthesized position. Display fields are copied out of the
/// referenced catalog record at generation time.
#[derive(Debug, Clone, Serialize)]
pub struct ExposureEntry {
    pub protocol_id: String,
    pub protocol_name: String,
    pub category: String,
    pub allocation_pct: f64,
    pub value_usd: f64,
    pub risk_rating: String,
    pub risk_score: u8,
    pub position_type: PositionType,
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Deterministically fabricates a portfolio for the wallet.
///
/// Selects 3-6 distinct protocols from the catalog, then splits 100
/// percentage points across them in selection order. Each non-final
/// entry draws from [5, remaining - 5 per slot still to fill]; the
/// final entry absorbs whatever remains, which pins the sum at 100.0
/// regardless of rounding drift along the way.
///
/// Per-entry USD values are rounded independently, so they carry a few
/// cents of slack against `total_value_usd`. That slack is part of the
/// fixture contract; callers must not redistribute it.
pub fn generate(catalog: &Catalog, wallet: &str) -> (Vec<ExposureEntry>, f64) {
    let mut rng = seed::wallet_rng(wallet);

    let count = rng.gen_range(MIN_PROTOCOLS..=MAX_PROTOCOLS);
    let selected = index::sample(&mut rng, catalog.len(), count).into_vec();
    let total_value = round2(rng.gen_range(MIN_TOTAL_VALUE_USD..=MAX_TOTAL_VALUE_USD));

    let mut exposures = Vec::with_capacity(count);
    let mut remaining = 100.0_f64;

    for (i, idx) in selected.iter().enumerate() {
        let protocol = &catalog.protocols()[*idx];
        let left_after = count - i - 1;

        let pct = if left_after == 0 {
            round1(remaining)
        } else {
            // Rounding can nudge the reserve bound fractionally below
            // the minimum, so clamp before drawing.
            let upper =
                (remaining - MIN_ALLOCATION_PCT * left_after as f64).max(MIN_ALLOCATION_PCT);
            let drawn = round1(rng.gen_range(MIN_ALLOCATION_PCT..=upper));
            remaining -= drawn;
            drawn
        };

        let value_usd = round2(total_value * pct / 100.0);
        let position_type = PositionType::ALL[rng.gen_range(0..PositionType::ALL.len())];

        exposures.push(ExposureEntry {
            protocol_id: protocol.id.to_string(),
            protocol_name: protocol.name.to_string(),
            category: protocol.category.to_string(),
            allocation_pct: pct,
            value_usd,
            risk_rating: protocol.risk_rating.to_string(),
            risk_score: protocol.risk_score,
            position_type,
        });
    }

    (exposures, total_value)
}
