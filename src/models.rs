// ABOUTME: Core data types for meal analysis input and stored user profiles
// ABOUTME: Nutrient lists, meal analysis payloads, and the optional-field raw profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! Data models for the insight pipeline.
//!
//! `MealAnalysis` is opaque external input (the output of an upstream vision
//! model); it is read, never validated for internal consistency. `UserProfile`
//! is the raw persisted profile in which every field is optional - resolution
//! into a fully-populated profile happens in [`crate::profile`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit in which a stored body weight is expressed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeightUnit {
    /// Pounds
    #[default]
    #[serde(rename = "lb")]
    Pounds,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
}

impl WeightUnit {
    /// Convert an amount in this unit to kilograms
    #[must_use]
    pub fn to_kilograms(self, amount: f64) -> f64 {
        match self {
            Self::Pounds => amount * 0.453_592,
            Self::Kilograms => amount,
        }
    }
}

/// Unit in which a stored body height is expressed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeightUnit {
    /// Inches
    #[default]
    #[serde(rename = "in")]
    Inches,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
}

impl HeightUnit {
    /// Convert an amount in this unit to centimeters
    #[must_use]
    pub fn to_centimeters(self, amount: f64) -> f64 {
        match self {
            Self::Inches => amount * 2.54,
            Self::Centimeters => amount,
        }
    }
}

/// A single nutrient entry from an upstream meal analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name as reported upstream (e.g. "Protein", "Vitamin C")
    pub name: String,

    /// Amount of the nutrient in `unit`
    pub amount: f64,

    /// Unit of measure (e.g. "g", "mg", "mcg")
    pub unit: String,

    /// Percent of the reference daily value, when reported
    #[serde(default, alias = "percentDailyValue")]
    pub percent_daily_value: Option<f64>,

    /// Optional upstream description of the nutrient's role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Meal analysis payload as produced by the upstream vision model
///
/// Every list field is optional: upstream payloads routinely omit or null
/// sections, and the composer degrades by omitting the matching report section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Display name of the meal, when identified
    #[serde(default)]
    pub meal_name: Option<String>,

    /// Estimated total calories (kcal); 0.0 when the estimate is absent
    #[serde(default)]
    pub calories: f64,

    /// Macronutrient entries (protein, carbohydrates, fat, fiber, ...)
    #[serde(default)]
    pub macronutrients: Option<Vec<Nutrient>>,

    /// Micronutrient entries (vitamins, minerals, electrolytes)
    #[serde(default)]
    pub micronutrients: Option<Vec<Nutrient>>,

    /// Health benefits attributed to the meal
    #[serde(default)]
    pub benefits: Option<Vec<String>>,

    /// Nutritional concerns flagged for the meal
    #[serde(default)]
    pub concerns: Option<Vec<String>>,

    /// Improvement suggestions supplied upstream
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,

    /// When the meal was recorded; carried through but never used in
    /// report generation (output must be idempotent)
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl MealAnalysis {
    /// Whether the analysis carries anything a report could be built from
    #[must_use]
    pub fn has_usable_data(&self) -> bool {
        let has_list = |list: &Option<Vec<String>>| list.as_ref().is_some_and(|l| !l.is_empty());
        let has_nutrients =
            |list: &Option<Vec<Nutrient>>| list.as_ref().is_some_and(|l| !l.is_empty());

        self.calories > 0.0
            || has_nutrients(&self.macronutrients)
            || has_nutrients(&self.micronutrients)
            || has_list(&self.benefits)
            || has_list(&self.concerns)
            || has_list(&self.suggestions)
    }
}

/// Raw user profile as persisted by the surrounding application
///
/// All fields are optional. A missing or non-positive numeric field counts as
/// absent; resolution substitutes the configured default instead of rejecting
/// the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,

    /// Age in years; must be > 0 to count as present
    #[serde(default)]
    pub age: Option<u32>,

    /// Free-text gender as entered by the user
    #[serde(default)]
    pub gender: Option<String>,

    /// Body weight in `weight_unit`; must be > 0 to count as present
    #[serde(default)]
    pub weight: Option<f64>,

    /// Unit for `weight`
    #[serde(default)]
    pub weight_unit: Option<WeightUnit>,

    /// Body height in `height_unit`; must be > 0 to count as present
    #[serde(default)]
    pub height: Option<f64>,

    /// Unit for `height`
    #[serde(default)]
    pub height_unit: Option<HeightUnit>,

    /// Free-text activity level (matched by substring against a fixed table)
    #[serde(default)]
    pub activity_level: Option<String>,

    /// Free-text health goal (matched by substring against a fixed table)
    #[serde(default)]
    pub goal: Option<String>,
}
