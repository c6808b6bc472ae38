//! Signal classifier behaviour

use commodity_scanner::services::{
    classify_against, normalize_volatility, risk_reward, risk_reward_value, ReferenceCatalog,
    SignalClassifier,
};
use commodity_scanner::types::*;
use serde_json::json;
use std::sync::Arc;

fn classifier() -> SignalClassifier {
    SignalClassifier::new(Arc::new(ReferenceCatalog::commodities()))
}

#[test]
fn test_normalize_volatility_positive_price() {
    assert_eq!(normalize_volatility(50.0, 200.0), 25.0);
    assert_eq!(normalize_volatility(1.5, 3.0), 50.0);
}

#[test]
fn test_normalize_volatility_non_positive_price_is_zero() {
    for price in [0.0, -0.0, -1.0, -2500.0] {
        assert_eq!(normalize_volatility(12.0, price), 0.0);
    }
}

#[test]
fn test_spread_boundaries_for_gold() {
    let c = classifier();
    let gold = InstrumentId::from("XAU_USD");

    assert_eq!(c.classify_spread(&gold, 0.08), SpreadClass::Tight);
    assert_eq!(c.classify_spread(&gold, 0.08000001), SpreadClass::Normal);
    assert_eq!(c.classify_spread(&gold, 0.10), SpreadClass::Normal);
    assert_eq!(c.classify_spread(&gold, 0.12), SpreadClass::Normal);
    assert_eq!(c.classify_spread(&gold, 0.12000001), SpreadClass::Wide);
}

#[test]
fn test_classify_against_matches_catalog_lookup() {
    let c = classifier();
    let natgas = InstrumentId::from("NATGAS_USD");
    for spread in [0.0, 0.2, 0.24, 0.3, 0.36, 0.5] {
        assert_eq!(c.classify_spread(&natgas, spread), classify_against(spread, 0.30));
    }
}

#[test]
fn test_non_positive_spread_uses_same_rule() {
    let c = classifier();
    let silver = InstrumentId::from("XAG_USD");
    assert_eq!(c.classify_spread(&silver, 0.0), SpreadClass::Tight);
    assert_eq!(c.classify_spread(&silver, -0.3), SpreadClass::Tight);
}

#[test]
fn test_uncatalogued_instrument_is_unknown() {
    let c = classifier();
    let fx = InstrumentId::from("EUR_USD");
    for spread in [-1.0, 0.0, 0.0001, 0.1, 100.0] {
        assert_eq!(c.classify_spread(&fx, spread), SpreadClass::Unknown);
    }
}

#[test]
fn test_risk_reward_examples() {
    assert_eq!(risk_reward(100.0, 110.0, 100.0), 0.0);
    assert_eq!(risk_reward(100.0, 110.0, 95.0), 2.0);
    assert_eq!(risk_reward_value(&json!(100), &json!("bad"), &json!(95)), 0.0);
}

#[test]
fn test_risk_reward_is_unbounded() {
    let ratio = risk_reward(100.0, 1100.0, 99.0);
    assert_eq!(ratio, 1000.0);
}

#[test]
fn test_risk_reward_uses_absolute_distances() {
    // Short setup: target below, stop above
    assert_eq!(risk_reward(100.0, 90.0, 105.0), 2.0);
}

#[test]
fn test_evaluate_is_idempotent() {
    let c = classifier();
    let mut snapshot = QuoteSnapshot::new("XPT_USD", 980.0, 980.3, 980.0, 14.7, 1010.0, 970.0, 800.0);
    snapshot.change_24h_pct = Some(-0.4);

    let first = c.evaluate(&snapshot);
    let second = c.evaluate(&snapshot);
    assert_eq!(first, second);
    assert_eq!(
        first.normalized_atr_pct.to_bits(),
        second.normalized_atr_pct.to_bits()
    );
    assert_eq!(first.risk_reward_ratio.to_bits(), second.risk_reward_ratio.to_bits());
}

#[test]
fn test_evaluate_degraded_snapshot() {
    let c = classifier();
    let snapshot = QuoteSnapshot::new("LUMBER_USD", 500.0, 520.0, 0.0, 5.0, f64::NAN, 490.0, 0.0);
    let report = c.evaluate(&snapshot);

    assert_eq!(report.normalized_atr_pct, 0.0);
    assert_eq!(report.spread_classification, SpreadClass::Unknown);
    assert_eq!(report.spread_classification.tone(), Tone::Neutral);
    assert_eq!(report.risk_reward_ratio, 0.0);
    assert!(!report.has_risk_reward());
    assert!(!report.has_volatility());
}

#[test]
fn test_evaluate_all_preserves_order() {
    let c = classifier();
    let snapshots = vec![
        QuoteSnapshot::new("WHEAT_USD", 5.9, 6.2, 5.9, 0.1, 6.3, 5.7, 10.0),
        QuoteSnapshot::new("BCO_USD", 82.0, 82.03, 82.0, 1.0, 84.0, 81.0, 10.0),
    ];
    let reports = c.evaluate_all(&snapshots);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].instrument.as_str(), "WHEAT_USD");
    assert_eq!(reports[0].spread_classification, SpreadClass::Wide);
    assert_eq!(reports[1].instrument.as_str(), "BCO_USD");
    assert_eq!(reports[1].spread_classification, SpreadClass::Tight);
}

#[test]
fn test_classifier_with_substitute_catalog() {
    let catalog = ReferenceCatalog::builder()
        .instrument(InstrumentGroup::Energy, "EUR_USD", 0.0002)
        .build()
        .unwrap();
    let c = SignalClassifier::new(Arc::new(catalog));

    assert_eq!(c.classify_spread(&"EUR_USD".into(), 0.0001), SpreadClass::Tight);
    assert_eq!(c.classify_spread(&"XAU_USD".into(), 0.05), SpreadClass::Unknown);
}

#[test]
fn test_report_serialization() {
    let c = classifier();
    let snapshot = QuoteSnapshot::new("XAU_USD", 2000.0, 2000.2, 2000.0, 20.0, 2030.0, 1990.0, 1.0);
    let json = serde_json::to_value(c.evaluate(&snapshot)).unwrap();

    assert_eq!(json["instrument"], "XAU_USD");
    assert_eq!(json["spreadClassification"], "WIDE");
    assert_eq!(json["riskRewardRatio"], 3.0);
}
