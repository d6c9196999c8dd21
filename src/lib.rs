// ABOUTME: Meal insight engine: profile resolution, metabolic estimation, report composition
// ABOUTME: Crate root wiring modules together behind the generate_meal_insights facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # Meal Insights
//!
//! Derives personalized nutrition insight reports from meal analyses.
//!
//! The pipeline has three stages:
//!
//! 1. **Profile resolution** ([`profile::EffectiveProfile::resolve`]) - fills
//!    missing fields with configured defaults, classifies free-text
//!    gender/activity/goal values, and converts imperial units to metric.
//! 2. **Metabolic estimation** ([`algorithms::BmrFormula`]) - BMR via
//!    Mifflin-St Jeor (or Harris-Benedict), TDEE via activity multipliers,
//!    and a goal-adjusted daily calorie target.
//! 3. **Report composition** ([`insights::InsightComposer`]) - an ordered
//!    markdown report with macro/micronutrient highlights, benefits,
//!    concerns, and goal-specific suggestions.
//!
//! The whole pipeline is pure and total: it never fails, never performs I/O,
//! and identical inputs always produce byte-identical output.
//!
//! ```
//! use meal_insights::{generate_meal_insights, InsightEngineConfig, MealAnalysis, UserProfile};
//!
//! let config = InsightEngineConfig::default();
//! let profile = UserProfile {
//!     age: Some(30),
//!     goal: Some("Weight Loss".to_owned()),
//!     ..UserProfile::default()
//! };
//! let meal = MealAnalysis {
//!     calories: 520.0,
//!     ..MealAnalysis::default()
//! };
//!
//! let report = generate_meal_insights(&meal, Some(&profile), &config);
//! assert!(report.starts_with("## Personalized Nutrition Analysis"));
//! ```

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod insights;
pub mod models;
pub mod profile;

pub use algorithms::BmrFormula;
pub use config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, InsightConfig, InsightEngineConfig,
    ProfileDefaultsConfig,
};
pub use errors::{AppError, AppResult, ErrorCode};
pub use insights::InsightComposer;
pub use models::{HeightUnit, MealAnalysis, Nutrient, UserProfile, WeightUnit};
pub use profile::{ActivityLevel, EffectiveProfile, Gender, NutritionGoal};

/// Generate a markdown insight report for a meal.
///
/// Resolves the raw profile (when one is given), derives the metabolic chain,
/// and composes the report. Stateless and synchronous; safe to call from any
/// number of threads.
#[must_use]
pub fn generate_meal_insights(
    meal: &MealAnalysis,
    profile: Option<&UserProfile>,
    config: &InsightEngineConfig,
) -> String {
    let resolved = profile.map(|p| EffectiveProfile::resolve(p, config));
    InsightComposer::with_config(config.insights.clone()).compose(meal, resolved.as_ref())
}
