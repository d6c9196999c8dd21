// ABOUTME: Basal metabolic rate equations as a selectable algorithm enum
// ABOUTME: Mifflin-St Jeor (default) and revised Harris-Benedict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # BMR Estimation Formulas
//!
//! Two published equations for resting energy expenditure. Mifflin-St Jeor
//! (1990) is the default; the revised Harris-Benedict (Roza & Shizgal, 1984)
//! is kept for callers that need to match estimates produced with it.
//! Coefficients are data, supplied via [`BmrConfig`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BmrConfig;
use crate::errors::AppError;
use crate::profile::Gender;

/// BMR calculation formula variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor equation (1990)
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict equation (1984)
    HarrisBenedict,
}

impl BmrFormula {
    /// Estimate BMR in kcal/day.
    ///
    /// Total for any finite inputs; domain validation (positive weight,
    /// height, age) happens upstream during profile resolution.
    #[must_use]
    pub fn estimate(
        self,
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: Gender,
        config: &BmrConfig,
    ) -> f64 {
        let age = f64::from(age_years);
        match self {
            Self::MifflinStJeor => {
                let base = config.msj_weight_coef * weight_kg
                    + config.msj_height_coef * height_cm
                    + config.msj_age_coef * age;
                match gender {
                    Gender::Male => base + config.msj_male_constant,
                    Gender::Other => base + config.msj_other_constant,
                }
            }
            Self::HarrisBenedict => match gender {
                Gender::Male => {
                    config.hb_male_base
                        + config.hb_male_weight_coef * weight_kg
                        + config.hb_male_height_coef * height_cm
                        + config.hb_male_age_coef * age
                }
                Gender::Other => {
                    config.hb_other_base
                        + config.hb_other_weight_coef * weight_kg
                        + config.hb_other_height_coef * height_cm
                        + config.hb_other_age_coef * age
                }
            },
        }
    }

    /// Short identifier for logs and serialized config
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
        }
    }

    /// Human-readable formula summary (male constant set)
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "10.0*weight_kg + 6.25*height_cm - 5.0*age + s",
            Self::HarrisBenedict => "base + w_coef*weight_kg + h_coef*height_cm - a_coef*age",
        }
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "mifflin_st_jeor" | "mifflin" | "msj" => Ok(Self::MifflinStJeor),
            "harris_benedict" | "harris" | "hb" => Ok(Self::HarrisBenedict),
            other => Err(AppError::invalid_input(format!(
                "unknown BMR formula: {other}"
            ))),
        }
    }
}
