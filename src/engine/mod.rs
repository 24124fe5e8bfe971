pub mod exposure;
pub mod recommend;
pub mod scorer;
pub mod seed;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine::exposure::{round2, ExposureEntry};
use crate::engine::recommend::Recommendation;

pub const MIN_PREMIUM_BPS: u16 = 10;

const DISCLAIMER: &str = "Mock data for demo purposes. Not financial advice.";

/// Full analysis payload for one wallet. Computed synchronously per
/// request and discarded after serialization.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub wallet_address: String,
    pub risk_score: u8,
    pub risk_label: &'static str,
    pub risk_color: &'static str,
    pub weighted_protocol_risk: f64,
    pub total_value_usd: f64,
    pub protocol_count: usize,
    pub exposures: Vec<ExposureEntry>,
    pub recommendations: Vec<Recommendation>,
    pub erc8004_eligible: bool,
    pub underwriting_premium_bps: u16,
    pub mock_mode: bool,
    pub disclaimer: &'static str,
}

/// Runs the whole pipeline for a validated wallet. Infallible: the
/// scorer and generator are pure functions over the wallet digest and
/// the fixed catalog.
pub fn analyze(catalog: &Catalog, wallet: &str) -> AnalysisResult {
    let risk_score = scorer::score(wallet);
    let (exposures, total_value_usd) = exposure::generate(catalog, wallet);
    let recommendations = recommend::recommend(risk_score, &exposures);

    let (risk_label, risk_color) = risk_band(risk_score);

    AnalysisResult {
        wallet_address: wallet.to_string(),
        risk_score,
        risk_label,
        risk_color,
        weighted_protocol_risk: weighted_protocol_risk(&exposures),
        total_value_usd,
        protocol_count: exposures.len(),
        exposures,
        recommendations,
        erc8004_eligible: true,
        underwriting_premium_bps: premium_bps(risk_score),
        mock_mode: true,
        disclaimer: DISCLAIMER,
    }
}

/// Headline display band. Deliberately looser than the recommendation
/// engine's 40/60 tiers; the two threshold sets stay independent.
pub fn risk_band(risk_score: u8) -> (&'static str, &'static str) {
    if risk_score <= 30 {
        ("Low Risk", "green")
    } else if risk_score <= 55 {
        ("Medium Risk", "yellow")
    } else {
        ("High Risk", "red")
    }
}

/// Allocation-weighted average of exposure risk scores, rounded to 2dp.
pub fn weighted_protocol_risk(exposures: &[ExposureEntry]) -> f64 {
    let weighted: f64 = exposures
        .iter()
        .map(|e| f64::from(e.risk_score) * e.allocation_pct / 100.0)
        .sum();
    round2(weighted)
}

/// Synthetic premium in basis points, floored at 10.
pub fn premium_bps(risk_score: u8) -> u16 {
    (u16::from(risk_score) * 2).max(MIN_PREMIUM_BPS)
}
