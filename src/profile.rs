// ABOUTME: Profile resolution: free-text classifiers, default substitution, metric conversion
// ABOUTME: Derives BMI, BMR, TDEE, and target calories into an EffectiveProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # Profile Resolution
//!
//! Turns the raw all-optional [`UserProfile`] into a fully-populated
//! [`EffectiveProfile`]. Resolution is total: any missing or invalid field is
//! substituted with its configured default (logged at `debug`), free text is
//! classified into enums at this boundary, imperial units are converted to
//! metric, and the metabolic chain (BMR, TDEE, target calories) is derived.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, GoalAdjustmentsConfig, InsightEngineConfig};
use crate::models::{HeightUnit, UserProfile, WeightUnit};

/// Gender as used by the BMR equations
///
/// Only two constant sets exist in the underlying equations, so anything that
/// does not classify as `Male` uses the other constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant set
    Male,
    /// Every other stored value
    Other,
}

impl Gender {
    /// Classify a stored free-text gender value.
    ///
    /// Matches by case-insensitive substring "male". Note this means "female"
    /// also classifies as `Male`; stored data relies on this behavior and it
    /// is kept for compatibility.
    #[must_use]
    pub fn from_free_text(text: &str) -> Self {
        if text.to_lowercase().contains("male") {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Activity level derived from stored free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
    /// Professional or twice-daily training
    Athlete,
}

impl ActivityLevel {
    /// Classify a stored free-text activity value.
    ///
    /// First substring match wins; "very active" is checked before "active"
    /// and "moderate" before "active" so that compound phrases land on their
    /// intended level. Unmatched text falls back to `Moderate`.
    #[must_use]
    pub fn from_free_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("sedentary") {
            Self::Sedentary
        } else if lower.contains("light") {
            Self::Light
        } else if lower.contains("very active") {
            Self::VeryActive
        } else if lower.contains("moderate") {
            Self::Moderate
        } else if lower.contains("active") {
            Self::Active
        } else if lower.contains("athlete") {
            Self::Athlete
        } else {
            Self::Moderate
        }
    }

    /// TDEE multiplier for this level
    #[must_use]
    pub fn multiplier(self, factors: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => factors.sedentary,
            Self::Light => factors.light,
            Self::Moderate => factors.moderate,
            Self::Active => factors.active,
            Self::VeryActive => factors.very_active,
            Self::Athlete => factors.athlete,
        }
    }
}

/// Health goal derived from stored free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Mild deficit for general health
    Longevity,
    /// No adjustment
    Maintenance,
}

impl NutritionGoal {
    /// Classify a stored free-text goal value.
    ///
    /// Precedence: weight loss, then muscle gain, then longevity/general
    /// health, so "lose weight and gain muscle" resolves to weight loss.
    #[must_use]
    pub fn from_free_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("weight loss") || lower.contains("lose") {
            Self::WeightLoss
        } else if lower.contains("muscle") || lower.contains("strength") || lower.contains("gain")
        {
            Self::MuscleGain
        } else if lower.contains("longevity") || lower.contains("health") {
            Self::Longevity
        } else {
            Self::Maintenance
        }
    }

    /// Target-calorie multiplier for this goal
    #[must_use]
    pub fn multiplier(self, adjustments: &GoalAdjustmentsConfig) -> f64 {
        match self {
            Self::WeightLoss => adjustments.weight_loss,
            Self::MuscleGain => adjustments.muscle_gain,
            Self::Longevity => adjustments.longevity,
            Self::Maintenance => adjustments.maintenance,
        }
    }
}

/// Fully-resolved profile with the derived metabolic chain
///
/// Computed on demand, never persisted. Every field is populated; producing
/// one cannot fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveProfile {
    /// Age in years
    pub age: u32,
    /// Classified gender
    pub gender: Gender,
    /// Gender text as it will appear in the report
    pub gender_label: String,
    /// Weight in the stored unit
    pub weight: f64,
    /// Unit of `weight`
    pub weight_unit: WeightUnit,
    /// Height in the stored unit
    pub height: f64,
    /// Unit of `height`
    pub height_unit: HeightUnit,
    /// Classified activity level
    pub activity: ActivityLevel,
    /// Classified goal
    pub goal: NutritionGoal,
    /// Goal text as it will appear in the report
    pub goal_label: String,
    /// Weight converted to kilograms
    pub weight_kg: f64,
    /// Height converted to centimeters
    pub height_cm: f64,
    /// Body mass index (kg / m^2)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure, rounded to whole kcal
    pub tdee: f64,
    /// Goal-adjusted daily calorie target
    pub target_calories: u32,
}

impl EffectiveProfile {
    /// Resolve a raw profile into a fully-populated effective profile.
    ///
    /// Total: missing and non-positive fields get the configured defaults,
    /// each substitution logged at `debug`.
    #[must_use]
    pub fn resolve(profile: &UserProfile, config: &InsightEngineConfig) -> Self {
        let defaults = &config.defaults;

        let gender_label = match &profile.gender {
            Some(g) if !g.trim().is_empty() => g.clone(),
            _ => {
                debug!(default = %defaults.gender, "profile missing gender, using default");
                defaults.gender.clone()
            }
        };
        let gender = Gender::from_free_text(&gender_label);

        let age = match profile.age {
            Some(a) if a > 0 => a,
            _ => {
                debug!(default = defaults.age, "profile missing age, using default");
                defaults.age
            }
        };

        let (weight, weight_unit) = match (profile.weight, profile.weight_unit) {
            (Some(w), unit) if w > 0.0 => (w, unit.unwrap_or_default()),
            _ => {
                debug!(
                    default = defaults.weight,
                    "profile missing weight, using default"
                );
                (defaults.weight, defaults.weight_unit)
            }
        };

        let (height, height_unit) = match (profile.height, profile.height_unit) {
            (Some(h), unit) if h > 0.0 => (h, unit.unwrap_or_default()),
            _ => {
                debug!(
                    default = defaults.height,
                    "profile missing height, using default"
                );
                (defaults.height, defaults.height_unit)
            }
        };

        let activity_label = match &profile.activity_level {
            Some(a) if !a.trim().is_empty() => a.clone(),
            _ => {
                debug!(
                    default = %defaults.activity_level,
                    "profile missing activity level, using default"
                );
                defaults.activity_level.clone()
            }
        };
        let activity = ActivityLevel::from_free_text(&activity_label);

        let goal_label = match &profile.goal {
            Some(g) if !g.trim().is_empty() => g.clone(),
            _ => {
                debug!(default = %defaults.goal, "profile missing goal, using default");
                defaults.goal.clone()
            }
        };
        let goal = NutritionGoal::from_free_text(&goal_label);

        let weight_kg = weight_unit.to_kilograms(weight);
        let height_cm = height_unit.to_centimeters(height);

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);

        let bmr = config
            .bmr
            .formula
            .estimate(weight_kg, height_cm, age, gender, &config.bmr);

        // TDEE is rounded to whole kcal before goal adjustment, so targets
        // match the values users have already seen.
        let tdee = (bmr * activity.multiplier(&config.activity_factors)).round();
        let target_calories =
            (tdee * goal.multiplier(&config.goal_adjustments)).round() as u32;

        Self {
            age,
            gender,
            gender_label,
            weight,
            weight_unit,
            height,
            height_unit,
            activity,
            goal,
            goal_label,
            weight_kg,
            height_cm,
            bmi,
            bmr,
            tdee,
            target_calories,
        }
    }
}
