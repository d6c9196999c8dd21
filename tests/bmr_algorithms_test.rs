// ABOUTME: Integration tests for the BMR formula implementations
// ABOUTME: Covers Mifflin-St Jeor and Harris-Benedict values, parsing, config validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::str::FromStr;

use meal_insights::{
    ActivityFactorsConfig, BmrConfig, BmrFormula, ErrorCode, Gender, GoalAdjustmentsConfig,
    InsightEngineConfig,
};

const EPS: f64 = 1e-6;

// ============================================================================
// Mifflin-St Jeor
// ============================================================================

#[test]
fn mifflin_st_jeor_male() {
    let config = BmrConfig::default();
    let bmr = BmrFormula::MifflinStJeor.estimate(75.0, 180.0, 30, Gender::Male, &config);

    // 10*75 + 6.25*180 - 5*30 + 5
    assert!((bmr - 1730.0).abs() < EPS);
}

#[test]
fn mifflin_st_jeor_other() {
    let config = BmrConfig::default();
    let bmr = BmrFormula::MifflinStJeor.estimate(60.0, 165.0, 25, Gender::Other, &config);

    // 10*60 + 6.25*165 - 5*25 - 161
    assert!((bmr - 1345.25).abs() < EPS);
}

#[test]
fn mifflin_st_jeor_is_the_default_formula() {
    assert_eq!(BmrFormula::default(), BmrFormula::MifflinStJeor);
    assert_eq!(
        BmrConfig::default().formula,
        BmrFormula::MifflinStJeor
    );
}

// ============================================================================
// Harris-Benedict
// ============================================================================

#[test]
fn harris_benedict_male() {
    let config = BmrConfig::default();
    let bmr = BmrFormula::HarrisBenedict.estimate(75.0, 180.0, 30, Gender::Male, &config);

    // 88.362 + 13.397*75 + 4.799*180 - 5.677*30
    assert!((bmr - 1786.647).abs() < EPS);
}

#[test]
fn harris_benedict_other() {
    let config = BmrConfig::default();
    let bmr = BmrFormula::HarrisBenedict.estimate(60.0, 165.0, 25, Gender::Other, &config);

    // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
    assert!((bmr - 1405.333).abs() < EPS);
}

#[test]
fn formulas_disagree_for_the_same_inputs() {
    let config = BmrConfig::default();
    let msj = BmrFormula::MifflinStJeor.estimate(75.0, 180.0, 30, Gender::Male, &config);
    let hb = BmrFormula::HarrisBenedict.estimate(75.0, 180.0, 30, Gender::Male, &config);

    assert!((msj - hb).abs() > 1.0);
}

// ============================================================================
// Parsing and naming
// ============================================================================

#[test]
fn formula_parses_from_common_spellings() {
    assert_eq!(
        BmrFormula::from_str("mifflin_st_jeor").unwrap(),
        BmrFormula::MifflinStJeor
    );
    assert_eq!(
        BmrFormula::from_str("Mifflin-St-Jeor").unwrap(),
        BmrFormula::MifflinStJeor
    );
    assert_eq!(BmrFormula::from_str("msj").unwrap(), BmrFormula::MifflinStJeor);
    assert_eq!(
        BmrFormula::from_str("harris_benedict").unwrap(),
        BmrFormula::HarrisBenedict
    );
    assert_eq!(
        BmrFormula::from_str("hb").unwrap(),
        BmrFormula::HarrisBenedict
    );
}

#[test]
fn unknown_formula_name_is_invalid_input() {
    let err = BmrFormula::from_str("katch_mcardle").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn formula_names_are_stable() {
    assert_eq!(BmrFormula::MifflinStJeor.name(), "mifflin_st_jeor");
    assert_eq!(BmrFormula::HarrisBenedict.name(), "harris_benedict");
}

// ============================================================================
// Configuration validation
// ============================================================================

#[test]
fn default_config_validates() {
    assert!(InsightEngineConfig::default().validate().is_ok());
}

#[test]
fn positive_age_coefficient_is_rejected() {
    let config = BmrConfig {
        msj_age_coef: 5.0,
        ..BmrConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn activity_factor_below_one_is_rejected() {
    let config = ActivityFactorsConfig {
        sedentary: 0.8,
        ..ActivityFactorsConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn non_positive_goal_adjustment_is_rejected() {
    let config = GoalAdjustmentsConfig {
        weight_loss: 0.0,
        ..GoalAdjustmentsConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn config_round_trips_through_json() {
    let config = InsightEngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: InsightEngineConfig = serde_json::from_str(&json).unwrap();

    assert!((back.bmr.msj_weight_coef - 10.0).abs() < EPS);
    assert!((back.activity_factors.very_active - 1.9).abs() < EPS);
    assert_eq!(back.bmr.formula, BmrFormula::MifflinStJeor);
}
