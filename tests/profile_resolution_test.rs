// ABOUTME: Integration tests for profile resolution and the derived metabolic chain
// ABOUTME: Covers default substitution, classifiers, unit conversion, TDEE and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use meal_insights::{
    ActivityLevel, EffectiveProfile, Gender, HeightUnit, InsightEngineConfig, NutritionGoal,
    UserProfile, WeightUnit,
};

const EPS: f64 = 1e-6;

fn resolve(profile: &UserProfile) -> EffectiveProfile {
    EffectiveProfile::resolve(profile, &InsightEngineConfig::default())
}

// ============================================================================
// Default substitution
// ============================================================================

#[test]
fn empty_profile_resolves_to_all_defaults() {
    let resolved = resolve(&UserProfile::default());

    assert_eq!(resolved.age, 30);
    assert_eq!(resolved.gender, Gender::Male);
    assert_eq!(resolved.gender_label, "Male");
    assert!((resolved.weight - 160.0).abs() < EPS);
    assert_eq!(resolved.weight_unit, WeightUnit::Pounds);
    assert!((resolved.height - 70.0).abs() < EPS);
    assert_eq!(resolved.height_unit, HeightUnit::Inches);
    assert_eq!(resolved.activity, ActivityLevel::Moderate);
    assert_eq!(resolved.goal, NutritionGoal::Longevity);
    assert_eq!(resolved.goal_label, "General Health");
}

#[test]
fn non_positive_numeric_fields_are_treated_as_missing() {
    let profile = UserProfile {
        age: Some(0),
        weight: Some(-5.0),
        height: Some(0.0),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    assert_eq!(resolved.age, 30);
    assert!((resolved.weight - 160.0).abs() < EPS);
    assert!((resolved.height - 70.0).abs() < EPS);
}

#[test]
fn blank_text_fields_are_treated_as_missing() {
    let profile = UserProfile {
        gender: Some("   ".to_owned()),
        activity_level: Some(String::new()),
        goal: Some("  ".to_owned()),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    assert_eq!(resolved.gender_label, "Male");
    assert_eq!(resolved.activity, ActivityLevel::Moderate);
    assert_eq!(resolved.goal_label, "General Health");
}

#[test]
fn partial_profiles_always_resolve_fully() {
    let partials = [
        UserProfile {
            age: Some(42),
            ..UserProfile::default()
        },
        UserProfile {
            weight: Some(80.0),
            weight_unit: Some(WeightUnit::Kilograms),
            ..UserProfile::default()
        },
        UserProfile {
            goal: Some("Muscle Gain".to_owned()),
            ..UserProfile::default()
        },
    ];

    for profile in &partials {
        let resolved = resolve(profile);
        assert!(resolved.age > 0);
        assert!(resolved.weight_kg > 0.0);
        assert!(resolved.height_cm > 0.0);
        assert!(resolved.bmr > 0.0);
        assert!(resolved.tdee > 0.0);
        assert!(resolved.target_calories > 0);
    }
}

// ============================================================================
// Unit conversion
// ============================================================================

#[test]
fn imperial_units_convert_to_metric() {
    let resolved = resolve(&UserProfile::default());

    assert!((resolved.weight_kg - 72.57472).abs() < EPS);
    assert!((resolved.height_cm - 177.8).abs() < EPS);
}

#[test]
fn metric_units_pass_through_unchanged() {
    let profile = UserProfile {
        weight: Some(75.0),
        weight_unit: Some(WeightUnit::Kilograms),
        height: Some(180.0),
        height_unit: Some(HeightUnit::Centimeters),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    assert!((resolved.weight_kg - 75.0).abs() < EPS);
    assert!((resolved.height_cm - 180.0).abs() < EPS);
}

// ============================================================================
// Metabolic chain: BMR, BMI, TDEE, target
// ============================================================================

#[test]
fn default_profile_bmr_matches_mifflin_st_jeor() {
    let resolved = resolve(&UserProfile::default());

    // 10 * 72.57472 + 6.25 * 177.8 - 5 * 30 + 5
    assert!((resolved.bmr - 1691.9972).abs() < EPS);
}

#[test]
fn default_profile_tdee_and_target() {
    let resolved = resolve(&UserProfile::default());

    // round(1691.9972 * 1.55) = 2623; General Health -> x0.9 -> 2361
    assert!((resolved.tdee - 2623.0).abs() < EPS);
    assert_eq!(resolved.target_calories, 2361);
}

#[test]
fn default_profile_bmi() {
    let resolved = resolve(&UserProfile::default());

    // 72.57472 / 1.778^2
    assert!((resolved.bmi - 22.957_4).abs() < 1e-3);
}

#[test]
fn metric_male_moderate_chain() {
    let profile = UserProfile {
        age: Some(30),
        gender: Some("Male".to_owned()),
        weight: Some(75.0),
        weight_unit: Some(WeightUnit::Kilograms),
        height: Some(180.0),
        height_unit: Some(HeightUnit::Centimeters),
        activity_level: Some("Moderate".to_owned()),
        goal: Some("Maintenance".to_owned()),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    assert!((resolved.bmr - 1730.0).abs() < EPS);
    assert!((resolved.tdee - 2682.0).abs() < EPS);
    assert_eq!(resolved.target_calories, 2682);
}

#[test]
fn weight_loss_goal_applies_deficit_to_rounded_tdee() {
    let profile = UserProfile {
        age: Some(30),
        gender: Some("Male".to_owned()),
        weight: Some(75.0),
        weight_unit: Some(WeightUnit::Kilograms),
        height: Some(180.0),
        height_unit: Some(HeightUnit::Centimeters),
        activity_level: Some("Moderate".to_owned()),
        goal: Some("Weight Loss".to_owned()),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    // round(2682 * 0.8) = 2146
    assert_eq!(resolved.target_calories, 2146);
}

// ============================================================================
// Free-text classifiers
// ============================================================================

#[test]
fn gender_substring_matching_includes_female() {
    // "female" contains "male"; stored data relies on this classification
    assert_eq!(Gender::from_free_text("female"), Gender::Male);
    assert_eq!(Gender::from_free_text("Male"), Gender::Male);
    assert_eq!(Gender::from_free_text("MALE"), Gender::Male);
    assert_eq!(Gender::from_free_text("woman"), Gender::Other);
    assert_eq!(Gender::from_free_text("non-binary"), Gender::Other);
}

#[test]
fn activity_classifier_checks_specific_phrases_first() {
    assert_eq!(
        ActivityLevel::from_free_text("Very Active"),
        ActivityLevel::VeryActive
    );
    assert_eq!(
        ActivityLevel::from_free_text("Moderately Active"),
        ActivityLevel::Moderate
    );
    assert_eq!(ActivityLevel::from_free_text("Active"), ActivityLevel::Active);
    assert_eq!(
        ActivityLevel::from_free_text("sedentary desk job"),
        ActivityLevel::Sedentary
    );
    assert_eq!(
        ActivityLevel::from_free_text("Light exercise"),
        ActivityLevel::Light
    );
    assert_eq!(
        ActivityLevel::from_free_text("athlete"),
        ActivityLevel::Athlete
    );
    assert_eq!(
        ActivityLevel::from_free_text("no idea"),
        ActivityLevel::Moderate
    );
}

#[test]
fn very_active_multiplier_is_reachable() {
    let profile = UserProfile {
        activity_level: Some("Very Active".to_owned()),
        ..UserProfile::default()
    };
    let resolved = resolve(&profile);

    // round(1691.9972 * 1.9) = 3215
    assert!((resolved.tdee - 3215.0).abs() < EPS);
}

#[test]
fn goal_classifier_precedence() {
    assert_eq!(
        NutritionGoal::from_free_text("lose weight and gain muscle"),
        NutritionGoal::WeightLoss
    );
    assert_eq!(
        NutritionGoal::from_free_text("Weight Loss"),
        NutritionGoal::WeightLoss
    );
    assert_eq!(
        NutritionGoal::from_free_text("strength training"),
        NutritionGoal::MuscleGain
    );
    assert_eq!(
        NutritionGoal::from_free_text("Muscle Gain"),
        NutritionGoal::MuscleGain
    );
    assert_eq!(
        NutritionGoal::from_free_text("General Health"),
        NutritionGoal::Longevity
    );
    assert_eq!(
        NutritionGoal::from_free_text("longevity"),
        NutritionGoal::Longevity
    );
    assert_eq!(
        NutritionGoal::from_free_text("just vibes"),
        NutritionGoal::Maintenance
    );
}
