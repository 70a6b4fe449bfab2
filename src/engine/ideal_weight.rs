// ABOUTME: Ideal-weight reference range strategies and the obesity weight correction
// ABOUTME: Implements BMI-band, Hamwi, and Robinson formulas plus adjusted body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Ideal/Adjusted Weight Resolver
//!
//! Computes the ideal-weight reference range for a subject's height and,
//! for obese subjects, the adjusted body weight used by the energy
//! calculations. Three formulas are selectable through
//! [`IdealWeightFormula`]; the healthy-BMI band is the default. Hamwi and
//! Robinson produce a single point estimate, which the resolver expands to
//! a ±10% range so every strategy honors the same `(min, max)` contract.

use crate::config::IdealWeightFormula;
use crate::engine::physiological_constants::ideal_weight as constants;
use crate::models::{IdealWeightRange, Sex, WeightBasis};

/// Ideal weight reference range for the subject's height and sex
#[must_use]
pub fn ideal_weight_range(
    formula: IdealWeightFormula,
    sex: Sex,
    height_cm: f64,
) -> IdealWeightRange {
    match formula {
        IdealWeightFormula::BmiBand => bmi_band_range(height_cm),
        IdealWeightFormula::Hamwi => {
            let point = point_estimate(
                sex,
                height_cm,
                constants::HAMWI_MALE_BASE_KG,
                constants::HAMWI_MALE_KG_PER_CM,
                constants::HAMWI_FEMALE_BASE_KG,
                constants::HAMWI_FEMALE_KG_PER_CM,
            );
            spread_range(point)
        }
        IdealWeightFormula::Robinson => {
            let point = point_estimate(
                sex,
                height_cm,
                constants::ROBINSON_MALE_BASE_KG,
                constants::ROBINSON_MALE_KG_PER_CM,
                constants::ROBINSON_FEMALE_BASE_KG,
                constants::ROBINSON_FEMALE_KG_PER_CM,
            );
            spread_range(point)
        }
    }
}

/// Healthy-BMI band [18.5, 24.9] expressed in kilograms
fn bmi_band_range(height_cm: f64) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let square = height_m * height_m;
    IdealWeightRange {
        min_kg: constants::BMI_BAND_MIN * square,
        max_kg: constants::BMI_BAND_MAX * square,
    }
}

/// Height/sex point estimate shared by the Hamwi and Robinson tables
///
/// Both formulas anchor at 152.4 cm (5 ft) and add a per-cm slope above
/// it. Heights below the anchor clamp to the base weight, matching how the
/// tables are used clinically.
fn point_estimate(
    sex: Sex,
    height_cm: f64,
    male_base: f64,
    male_slope: f64,
    female_base: f64,
    female_slope: f64,
) -> f64 {
    let over_base = (height_cm - constants::BASE_HEIGHT_CM).max(0.0);
    match sex {
        Sex::Male => male_slope.mul_add(over_base, male_base),
        Sex::Female => female_slope.mul_add(over_base, female_base),
    }
}

fn spread_range(point_kg: f64) -> IdealWeightRange {
    IdealWeightRange {
        min_kg: point_kg * (1.0 - constants::POINT_ESTIMATE_SPREAD),
        max_kg: point_kg * (1.0 + constants::POINT_ESTIMATE_SPREAD),
    }
}

/// Select the weight the BMR formula should use
///
/// Using actual weight directly overstates energy needs for obese
/// subjects, so when BMI exceeds 30 the resolver substitutes the adjusted
/// body weight `midpoint + 0.25 * (actual - midpoint)`. A BMI of exactly
/// 30.0 still uses the actual weight; the correction triggers strictly
/// above the obesity boundary.
#[must_use]
pub fn resolve_bmr_weight(
    bmi: f64,
    actual_weight_kg: f64,
    ideal_range: &IdealWeightRange,
) -> (f64, WeightBasis) {
    if bmi > crate::engine::physiological_constants::bmi::OBESE_MIN {
        let midpoint = ideal_range.midpoint_kg();
        let adjusted = constants::ADJUSTMENT_FACTOR.mul_add(actual_weight_kg - midpoint, midpoint);
        (adjusted, WeightBasis::Adjusted)
    } else {
        (actual_weight_kg, WeightBasis::Actual)
    }
}
