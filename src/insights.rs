// ABOUTME: Markdown report composition from a meal analysis and an optional profile
// ABOUTME: Ordered sections, top-micronutrient ranking, canned goal suggestions, total fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # Insight Composer
//!
//! Assembles the user-facing markdown report. Section order is fixed: title,
//! greeting, goal, calorie context, macronutrients, top micronutrients,
//! benefits, concerns, suggestions, closing tip. Composition never propagates
//! an error; a meal with no usable content (or any internal failure) yields
//! the configured fallback message and a `warn!`.

use std::fmt::Write;

use tracing::warn;

use crate::config::InsightConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{MealAnalysis, Nutrient};
use crate::profile::{EffectiveProfile, NutritionGoal};

/// Composes markdown insight reports
#[derive(Debug, Clone, Default)]
pub struct InsightComposer {
    config: InsightConfig,
}

impl InsightComposer {
    /// Create a composer with stock settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with custom settings
    #[must_use]
    pub const fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Compose the markdown report.
    ///
    /// Never fails: degenerate input degrades to the fallback message.
    #[must_use]
    pub fn compose(&self, meal: &MealAnalysis, profile: Option<&EffectiveProfile>) -> String {
        self.try_compose(meal, profile).unwrap_or_else(|err| {
            warn!(error = %err, "insight composition degraded to fallback");
            self.config.fallback_message.clone()
        })
    }

    fn try_compose(
        &self,
        meal: &MealAnalysis,
        profile: Option<&EffectiveProfile>,
    ) -> AppResult<String> {
        if !meal.has_usable_data() {
            return Err(AppError::internal("meal analysis has no usable content"));
        }

        let mut out = String::new();
        push_header(&mut out, profile)?;
        push_calorie_context(&mut out, meal, profile)?;
        push_macronutrients(&mut out, meal)?;
        self.push_micronutrients(&mut out, meal)?;
        push_list_section(&mut out, "Benefits", meal.benefits.as_deref())?;
        push_list_section(&mut out, "Concerns", meal.concerns.as_deref())?;
        self.push_suggestions(&mut out, meal, profile)?;
        push_closing_tip(&mut out, profile)?;
        Ok(out)
    }

    fn push_micronutrients(&self, out: &mut String, meal: &MealAnalysis) -> AppResult<()> {
        let Some(micros) = meal.micronutrients.as_ref().filter(|m| !m.is_empty()) else {
            return Ok(());
        };

        let mut ranked: Vec<&Nutrient> = micros.iter().collect();
        // Stable sort: ties and missing %DV keep their input order.
        ranked.sort_by(|a, b| {
            let a_dv = a.percent_daily_value.unwrap_or(f64::NEG_INFINITY);
            let b_dv = b.percent_daily_value.unwrap_or(f64::NEG_INFINITY);
            b_dv.total_cmp(&a_dv)
        });

        out.push_str("### Top Micronutrients\n\n");
        for n in ranked.into_iter().take(self.config.top_micronutrients) {
            push_nutrient_bullet(out, &n.name, n)?;
        }
        out.push('\n');
        Ok(())
    }

    fn push_suggestions(
        &self,
        out: &mut String,
        meal: &MealAnalysis,
        profile: Option<&EffectiveProfile>,
    ) -> AppResult<()> {
        out.push_str("### Suggestions\n\n");
        match meal.suggestions.as_ref().filter(|s| !s.is_empty()) {
            Some(suggestions) => {
                for s in suggestions {
                    writeln!(out, "- {s}").map_err(fmt_error)?;
                }
            }
            None => {
                let canned = canned_suggestions(profile.map(|p| p.goal));
                for s in canned.iter().take(self.config.max_suggestions) {
                    writeln!(out, "- {s}").map_err(fmt_error)?;
                }
            }
        }
        out.push('\n');
        Ok(())
    }
}

fn fmt_error(err: std::fmt::Error) -> AppError {
    AppError::internal(format!("report formatting failed: {err}"))
}

fn push_header(out: &mut String, profile: Option<&EffectiveProfile>) -> AppResult<()> {
    match profile {
        Some(p) => {
            writeln!(
                out,
                "## Personalized Nutrition Analysis for Your {} Goals\n",
                p.goal_label
            )
            .map_err(fmt_error)?;
            writeln!(
                out,
                "As a {}-year-old {} focused on {}, here's my comprehensive analysis of this meal:\n",
                p.age,
                p.gender_label,
                p.goal_label.to_lowercase()
            )
            .map_err(fmt_error)?;
            writeln!(out, "**Goal:** {}\n", p.goal_label).map_err(fmt_error)?;
        }
        None => {
            out.push_str("## Nutritional Analysis\n\n");
            out.push_str("Here's a nutritional analysis of this meal:\n\n");
        }
    }
    Ok(())
}

fn push_calorie_context(
    out: &mut String,
    meal: &MealAnalysis,
    profile: Option<&EffectiveProfile>,
) -> AppResult<()> {
    if meal.calories <= 0.0 {
        return Ok(());
    }
    match profile {
        Some(p) if p.target_calories > 0 => {
            let pct = (meal.calories / f64::from(p.target_calories) * 100.0).round() as i64;
            writeln!(
                out,
                "This meal contains approximately {:.0} calories ({pct}% of your {}-calorie daily target).\n",
                meal.calories, p.target_calories
            )
            .map_err(fmt_error)?;
        }
        _ => {
            writeln!(
                out,
                "This meal contains approximately {:.0} calories.\n",
                meal.calories
            )
            .map_err(fmt_error)?;
        }
    }
    Ok(())
}

fn push_macronutrients(out: &mut String, meal: &MealAnalysis) -> AppResult<()> {
    let Some(macros) = meal.macronutrients.as_ref().filter(|m| !m.is_empty()) else {
        return Ok(());
    };

    let mut found = Vec::new();
    for (label, needle) in [
        ("Protein", "protein"),
        ("Carbohydrates", "carb"),
        ("Fat", "fat"),
    ] {
        if let Some(n) = macros
            .iter()
            .find(|n| n.name.to_lowercase().contains(needle))
        {
            found.push((label, n));
        }
    }
    if found.is_empty() {
        return Ok(());
    }

    out.push_str("### Macronutrients\n\n");
    for (label, n) in found {
        push_nutrient_bullet(out, label, n)?;
    }
    out.push('\n');
    Ok(())
}

fn push_nutrient_bullet(out: &mut String, label: &str, nutrient: &Nutrient) -> AppResult<()> {
    match nutrient.percent_daily_value {
        Some(dv) => writeln!(
            out,
            "- **{label}:** {} {} ({dv:.0}% DV)",
            nutrient.amount, nutrient.unit
        ),
        None => writeln!(out, "- **{label}:** {} {}", nutrient.amount, nutrient.unit),
    }
    .map_err(fmt_error)
}

fn push_list_section(out: &mut String, title: &str, items: Option<&[String]>) -> AppResult<()> {
    let Some(items) = items.filter(|i| !i.is_empty()) else {
        return Ok(());
    };
    writeln!(out, "### {title}\n").map_err(fmt_error)?;
    for item in items {
        writeln!(out, "- {item}").map_err(fmt_error)?;
    }
    out.push('\n');
    Ok(())
}

fn push_closing_tip(out: &mut String, profile: Option<&EffectiveProfile>) -> AppResult<()> {
    if let Some(p) = profile {
        writeln!(out, "**Personalized tip:** {}", personalized_tip(p.goal)).map_err(fmt_error)?;
    }
    Ok(())
}

/// Stock suggestions used when the upstream analysis provides none
fn canned_suggestions(goal: Option<NutritionGoal>) -> &'static [&'static str] {
    match goal {
        Some(NutritionGoal::WeightLoss) => &[
            "Consider smaller portion sizes to stay within your calorie deficit",
            "Add fiber-rich vegetables to increase satiety",
            "Swap refined carbohydrates for whole grains",
            "Drink water before the meal to help manage portions",
        ],
        Some(NutritionGoal::MuscleGain) => &[
            "Add a lean protein source to support muscle repair",
            "Include complex carbohydrates to fuel your training",
            "Consider a larger portion if this is a post-workout meal",
            "Add healthy fats like nuts or avocado for extra calories",
        ],
        Some(NutritionGoal::Longevity) => &[
            "Add more colorful vegetables for antioxidant variety",
            "Include omega-3 rich foods like fatty fish or walnuts",
            "Choose whole grains over refined options",
            "Limit added sugars and heavily processed ingredients",
        ],
        Some(NutritionGoal::Maintenance) | None => &[
            "Balance this meal with vegetables if it lacks them",
            "Keep portion sizes consistent with your usual intake",
            "Include a source of lean protein with each meal",
            "Stay hydrated throughout the day",
        ],
    }
}

/// Closing advice chosen by goal
const fn personalized_tip(goal: NutritionGoal) -> &'static str {
    match goal {
        NutritionGoal::WeightLoss => {
            "A moderate calorie deficit is more sustainable than an aggressive cut. \
             Prioritize protein and fiber at each meal to stay full while losing weight."
        }
        NutritionGoal::MuscleGain => {
            "Spread your protein intake across the day and eat within a couple of hours \
             of training to make the most of your calorie surplus."
        }
        NutritionGoal::Longevity => {
            "Consistency matters more than any single meal. A mostly plant-forward \
             pattern with adequate protein supports long-term health."
        }
        NutritionGoal::Maintenance => {
            "Focus on overall balance across the day rather than optimizing every \
             individual meal."
        }
    }
}
