use serde::Serialize;

use crate::engine::exposure::ExposureEntry;
use crate::types::Severity;

/// Risk score above which an individual protocol is called out.
const HIGH_RISK_PROTOCOL_THRESHOLD: u8 = 45;
/// Portfolio-level tier boundaries for the mutually exclusive
/// severity recommendation.
const PORTFOLIO_HIGH_THRESHOLD: u8 = 60;
const PORTFOLIO_MEDIUM_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub icon: String,
    pub title: String,
    pub detail: String,
}

impl Recommendation {
    fn new(severity: Severity, icon: &str, title: &str, detail: String) -> Self {
        Self {
            severity,
            icon: icon.to_string(),
            title: title.to_string(),
            detail,
        }
    }
}

/// Derives advisory messages from the base score and the generated
/// exposures. Rules run in a fixed order and every match is emitted,
/// except the portfolio tier where exactly one of high/medium/low
/// applies.
pub fn recommend(risk_score: u8, exposures: &[ExposureEntry]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let high_risk: Vec<&str> = exposures
        .iter()
        .filter(|e| e.risk_score > HIGH_RISK_PROTOCOL_THRESHOLD)
        .map(|e| e.protocol_name.as_str())
        .collect();
    if !high_risk.is_empty() {
        recs.push(Recommendation::new(
            Severity::High,
            "⚠️",
            "High-Risk Protocol Exposure",
            format!(
                "Positions in {} carry elevated smart-contract and liquidity risk. \
                 Consider reducing allocation or hedging.",
                high_risk.join(", ")
            ),
        ));
    }

    if risk_score > PORTFOLIO_HIGH_THRESHOLD {
        recs.push(Recommendation::new(
            Severity::High,
            "🔴",
            "Portfolio Risk Exceeds Threshold",
            "Overall risk score is in the danger zone. Rebalancing toward audited, \
             battle-tested protocols is strongly advised."
                .to_string(),
        ));
    } else if risk_score > PORTFOLIO_MEDIUM_THRESHOLD {
        recs.push(Recommendation::new(
            Severity::Medium,
            "🟡",
            "Moderate Concentration Risk",
            "Portfolio shows moderate risk. Diversifying across more protocol \
             categories can smooth tail-risk exposure."
                .to_string(),
        ));
    } else {
        recs.push(Recommendation::new(
            Severity::Low,
            "✅",
            "Well-Diversified Portfolio",
            "Risk profile is healthy. Continue monitoring for protocol upgrades \
             and governance changes."
                .to_string(),
        ));
    }

    if exposures.iter().any(|e| e.category == "Lending") {
        recs.push(Recommendation::new(
            Severity::Info,
            "💡",
            "Liquidation Risk Monitor",
            "Active lending positions detected. Ensure health factors remain above \
             1.5x to avoid liquidation during volatility spikes."
                .to_string(),
        ));
    }

    recs.push(Recommendation::new(
        Severity::Info,
        "🛡️",
        "ERC-8004 Coverage Available",
        "This portfolio is eligible for ERC-8004 on-chain insurance underwriting. \
         Estimated premium: 0.8% APY for full coverage."
            .to_string(),
    ));

    recs
}
