// ABOUTME: Body composition classification from raw anthropometric measurements
// ABOUTME: Computes BMI with qualitative category and waist-to-hip ratio with risk class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Body Composition Classifier
//!
//! First stage of the analysis pipeline: turns validated measurements into
//! BMI and WHR with their qualitative classifications. The functions here
//! assume the subject already passed the central validation stage at the
//! pipeline entry ([`crate::engine::analyze`]); they contain no error paths
//! of their own.

use crate::engine::physiological_constants::{bmi as bmi_bands, whr as whr_thresholds};
use crate::models::{BmiCategory, Sex, WhrRisk};

/// Body Mass Index: weight (kg) divided by height (m) squared
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value into its qualitative band
///
/// Boundaries are inclusive on the lower bound of each band: 18.5 is
/// `Normal`, 25.0 is `Overweight`, 30.0 is `Obese`.
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < bmi_bands::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < bmi_bands::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < bmi_bands::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Waist-to-hip ratio, or `None` when either circumference is not provided
///
/// A zero circumference means "not measured", never a measured length of
/// zero, so the ratio is only computed when both values are positive.
#[must_use]
pub fn waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> Option<f64> {
    if waist_cm > 0.0 && hip_cm > 0.0 {
        Some(waist_cm / hip_cm)
    } else {
        None
    }
}

/// Classify a waist-to-hip ratio against the sex-specific risk threshold
///
/// Male WHR above 0.90 or female WHR above 0.85 indicates elevated
/// cardiometabolic risk. An absent ratio classifies as `Unavailable`.
#[must_use]
pub fn classify_whr(whr: Option<f64>, sex: Sex) -> WhrRisk {
    let Some(ratio) = whr else {
        return WhrRisk::Unavailable;
    };
    let threshold = match sex {
        Sex::Male => whr_thresholds::MALE_HIGH_RISK,
        Sex::Female => whr_thresholds::FEMALE_HIGH_RISK,
    };
    if ratio > threshold {
        WhrRisk::High
    } else {
        WhrRisk::Low
    }
}
