// ABOUTME: Configuration for the insight engine: defaults, coefficients, multipliers
// ABOUTME: All tunables live here as data with Default impls and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # Insight Engine Configuration
//!
//! Every constant the pipeline uses is configuration: profile defaults for the
//! normalizer, BMR equation coefficients, activity multipliers, and goal
//! adjustment factors. `Default` impls carry the stock values; `validate()`
//! rejects configurations that would produce nonsense (non-positive multipliers
//! or coefficients with the wrong sign domain).

use serde::{Deserialize, Serialize};

use crate::algorithms::BmrFormula;
use crate::errors::{AppError, AppResult};
use crate::models::{HeightUnit, WeightUnit};

/// Default profile values substituted for missing or invalid fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Default gender when the profile has none
    pub gender: String,
    /// Default age in years
    pub age: u32,
    /// Default height (in `height_unit`)
    pub height: f64,
    /// Unit of the default height
    pub height_unit: HeightUnit,
    /// Default weight (in `weight_unit`)
    pub weight: f64,
    /// Unit of the default weight
    pub weight_unit: WeightUnit,
    /// Default activity level
    pub activity_level: String,
    /// Default health goal
    pub goal: String,
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            gender: "Male".to_owned(),
            age: 30,
            height: 70.0,
            height_unit: HeightUnit::Inches,
            weight: 160.0,
            weight_unit: WeightUnit::Pounds,
            activity_level: "Moderate".to_owned(),
            goal: "General Health".to_owned(),
        }
    }
}

impl ProfileDefaultsConfig {
    /// Validate default profile values.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when a default is non-positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::config_invalid("default age must be positive"));
        }
        if self.height <= 0.0 {
            return Err(AppError::config_invalid("default height must be positive"));
        }
        if self.weight <= 0.0 {
            return Err(AppError::config_invalid("default weight must be positive"));
        }
        Ok(())
    }
}

/// Basal Metabolic Rate calculation configuration
///
/// Mifflin-St Jeor (1990) is the default equation; Harris-Benedict (revised
/// 1984) is available for callers that need to match older estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Which BMR equation to use
    pub formula: BmrFormula,

    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (kcal per year, negative)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor constant for everyone else
    pub msj_other_constant: f64,

    /// Harris-Benedict male base constant
    pub hb_male_base: f64,
    /// Harris-Benedict male weight coefficient
    pub hb_male_weight_coef: f64,
    /// Harris-Benedict male height coefficient
    pub hb_male_height_coef: f64,
    /// Harris-Benedict male age coefficient (negative)
    pub hb_male_age_coef: f64,

    /// Harris-Benedict base constant for everyone else
    pub hb_other_base: f64,
    /// Harris-Benedict weight coefficient for everyone else
    pub hb_other_weight_coef: f64,
    /// Harris-Benedict height coefficient for everyone else
    pub hb_other_height_coef: f64,
    /// Harris-Benedict age coefficient for everyone else (negative)
    pub hb_other_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            formula: BmrFormula::MifflinStJeor,

            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_other_constant: -161.0,

            hb_male_base: 88.362,
            hb_male_weight_coef: 13.397,
            hb_male_height_coef: 4.799,
            hb_male_age_coef: -5.677,

            hb_other_base: 447.593,
            hb_other_weight_coef: 9.247,
            hb_other_height_coef: 3.098,
            hb_other_age_coef: -4.330,
        }
    }
}

impl BmrConfig {
    /// Validate BMR coefficient sign domains.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when a coefficient has the wrong sign.
    pub fn validate(&self) -> AppResult<()> {
        if self.msj_weight_coef <= 0.0 {
            return Err(AppError::config_invalid(
                "msj_weight_coef must be positive",
            ));
        }
        if self.msj_height_coef <= 0.0 {
            return Err(AppError::config_invalid(
                "msj_height_coef must be positive",
            ));
        }
        if self.msj_age_coef >= 0.0 {
            return Err(AppError::config_invalid("msj_age_coef must be negative"));
        }
        if self.hb_male_weight_coef <= 0.0 || self.hb_other_weight_coef <= 0.0 {
            return Err(AppError::config_invalid(
                "Harris-Benedict weight coefficients must be positive",
            ));
        }
        if self.hb_male_age_coef >= 0.0 || self.hb_other_age_coef >= 0.0 {
            return Err(AppError::config_invalid(
                "Harris-Benedict age coefficients must be negative",
            ));
        }
        Ok(())
    }
}

/// Activity level multipliers applied to BMR to estimate TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise
    pub sedentary: f64,
    /// Light exercise 1-3 days/week
    pub light: f64,
    /// Moderate exercise 3-5 days/week
    pub moderate: f64,
    /// Hard exercise 6-7 days/week
    pub active: f64,
    /// Very hard exercise and a physical job
    pub very_active: f64,
    /// Professional or twice-daily training
    pub athlete: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
            athlete: 2.1,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that all multipliers are at least 1.0.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when any factor is below 1.0.
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("active", self.active),
            ("very_active", self.very_active),
            ("athlete", self.athlete),
        ];
        for (name, value) in factors {
            if value < 1.0 {
                return Err(AppError::config_invalid(format!(
                    "activity factor '{name}' must be >= 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Goal-based adjustment multipliers applied to TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Caloric deficit for weight loss
    pub weight_loss: f64,
    /// Caloric surplus for muscle gain
    pub muscle_gain: f64,
    /// Mild deficit for longevity and general health
    pub longevity: f64,
    /// No adjustment
    pub maintenance: f64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            weight_loss: 0.8,
            muscle_gain: 1.2,
            longevity: 0.9,
            maintenance: 1.0,
        }
    }
}

impl GoalAdjustmentsConfig {
    /// Validate that all adjustments are positive.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when any adjustment is non-positive.
    pub fn validate(&self) -> AppResult<()> {
        let adjustments = [
            ("weight_loss", self.weight_loss),
            ("muscle_gain", self.muscle_gain),
            ("longevity", self.longevity),
            ("maintenance", self.maintenance),
        ];
        for (name, value) in adjustments {
            if value <= 0.0 {
                return Err(AppError::config_invalid(format!(
                    "goal adjustment '{name}' must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Report composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// How many micronutrients the report highlights
    pub top_micronutrients: usize,
    /// How many canned suggestions to emit when the analysis has none
    pub max_suggestions: usize,
    /// Message returned when no usable report can be built
    pub fallback_message: String,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            top_micronutrients: 4,
            max_suggestions: 4,
            fallback_message: "Unable to generate detailed insights for this meal.".to_owned(),
        }
    }
}

impl InsightConfig {
    /// Validate report limits.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when a limit is zero or the fallback message is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.top_micronutrients == 0 {
            return Err(AppError::config_invalid(
                "top_micronutrients must be positive",
            ));
        }
        if self.fallback_message.is_empty() {
            return Err(AppError::config_invalid(
                "fallback_message must not be empty",
            ));
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightEngineConfig {
    /// Substitution defaults for incomplete profiles
    pub defaults: ProfileDefaultsConfig,
    /// BMR equation selection and coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustment multipliers for target calories
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Report composition settings
    pub insights: InsightConfig,
}

impl InsightEngineConfig {
    /// Validate the whole configuration.
    ///
    /// # Errors
    /// Returns the first `ConfigInvalid` error from any section.
    pub fn validate(&self) -> AppResult<()> {
        self.defaults.validate()?;
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.insights.validate()?;
        Ok(())
    }
}
