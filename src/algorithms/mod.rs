// ABOUTME: Metabolic estimation algorithms module
// ABOUTME: Re-exports the BMR formula implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! Metabolic estimation algorithms.

pub mod bmr;

pub use bmr::BmrFormula;
