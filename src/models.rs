// ABOUTME: Core domain models for subject measurements, analysis results, and diet plans
// ABOUTME: Defines Subject, ActivityLevel, AnalysisResult, DietPlan, and supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! # Domain Models
//!
//! Data types flowing through the analysis pipeline. [`Subject`] and
//! [`ActivityLevel`] are the engine's inputs; [`AnalysisResult`] and
//! [`DietPlan`] are its immutable outputs. All types are serde-ready so the
//! visit-record store and presentation collaborators can persist and render
//! them as JSON snapshots. None of the types retain engine state: each
//! analysis invocation produces fresh values that are handed to the caller
//! and forgotten.

use serde::{Deserialize, Serialize};

/// Biological sex for BMR calculation and safety floors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Female (lower BMR constant, 1200 kcal safety floor)
    Female,
    /// Male (higher BMR constant, 1500 kcal safety floor)
    Male,
}

/// A subject's raw measurements at a single intake visit
///
/// Waist and hip circumference are optional measurements; `0.0` means
/// "not provided". The engine validates the pair centrally at the pipeline
/// entry and never treats a zero as a measured length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms (must be positive)
    pub weight_kg: f64,
    /// Height in centimeters (must be positive)
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Waist circumference in centimeters (0.0 = not provided)
    #[serde(default)]
    pub waist_cm: f64,
    /// Hip circumference in centimeters (0.0 = not provided)
    #[serde(default)]
    pub hip_cm: f64,
}

impl Subject {
    /// Create a subject without waist/hip measurements
    #[must_use]
    pub const fn new(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> Self {
        Self {
            sex,
            weight_kg,
            height_cm,
            age,
            waist_cm: 0.0,
            hip_cm: 0.0,
        }
    }

    /// Attach waist and hip circumference measurements
    #[must_use]
    pub const fn with_circumferences(mut self, waist_cm: f64, hip_cm: f64) -> Self {
        self.waist_cm = waist_cm;
        self.hip_cm = hip_cm;
        self
    }
}

/// Activity level for TDEE calculation
///
/// The multiplier for each level lives in
/// [`crate::config::ActivityFactorsConfig`], not on the enum, so deployments
/// can tune factors without touching calculation code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise): factor 1.2
    Sedentary,
    /// Lightly active (1-3 days/week): factor 1.375
    LightlyActive,
    /// Moderately active (3-5 days/week): factor 1.55
    ModeratelyActive,
    /// Very active (6-7 days/week): factor 1.725
    VeryActive,
    /// Extra active (hard training 2x/day): factor 1.9
    ExtraActive,
}

/// Qualitative BMI classification
///
/// Band boundaries are inclusive on the lower bound: a BMI of exactly 25.0
/// is `Overweight`, exactly 30.0 is `Obese`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

/// Cardiometabolic risk classification from waist-to-hip ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WhrRisk {
    /// WHR at or below the sex-specific threshold
    Low,
    /// WHR above the sex-specific threshold (male > 0.90, female > 0.85)
    High,
    /// Waist or hip circumference was not provided
    Unavailable,
}

/// Which weight fed the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightBasis {
    /// Measured body weight (BMI <= 30)
    Actual,
    /// Adjusted body weight correction for obesity (BMI > 30)
    Adjusted,
}

/// Ideal weight reference range in kilograms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdealWeightRange {
    /// Lower bound of the healthy reference range (kg)
    pub min_kg: f64,
    /// Upper bound of the healthy reference range (kg)
    pub max_kg: f64,
}

impl IdealWeightRange {
    /// Midpoint of the range, used as the reference weight for the
    /// adjusted-body-weight correction
    #[must_use]
    pub fn midpoint_kg(&self) -> f64 {
        (self.min_kg + self.max_kg) / 2.0
    }
}

/// Complete metabolic analysis for one subject at one visit
///
/// A pure function of ([`Subject`], [`ActivityLevel`], engine configuration):
/// identical inputs always produce bit-identical results. The caller owns the
/// value; the engine retains nothing between invocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Subject's sex, carried through for downstream safety floors
    pub sex: Sex,
    /// Body Mass Index (kg/m²)
    pub bmi: f64,
    /// Qualitative BMI classification
    pub bmi_category: BmiCategory,
    /// Healthy weight reference range for the subject's height
    pub ideal_weight_range: IdealWeightRange,
    /// Weight fed into the BMR formula (kg)
    pub weight_used_for_bmr_kg: f64,
    /// Whether the BMR weight is the measured or obesity-adjusted value
    pub weight_basis: WeightBasis,
    /// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor
    pub bmr_kcal: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Daily water requirement (liters/day)
    pub water_need_liters: f64,
    /// Waist-to-hip ratio; `None` when either circumference was not provided
    pub whr: Option<f64>,
    /// WHR risk classification
    pub whr_risk: WhrRisk,
}

/// Direction of the weight goal relative to current weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Goal weight below current weight (caloric deficit)
    Lose,
    /// Goal weight equals current weight (eat at TDEE)
    Maintain,
    /// Goal weight above current weight (caloric surplus)
    Gain,
}

/// Named pace of weight change
///
/// Tiers map to daily kcal deltas through the configured tier tables; the
/// enum itself carries no magnitude, decoupling display labels from
/// computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    /// Gentle pace (default 250 kcal/day)
    Light,
    /// Recommended clinical pace (default 500 kcal/day)
    Standard,
    /// Fast pace (default 750 kcal/day)
    Aggressive,
    /// Supervised-only pace (default 1000 kcal/day, loss table only)
    Extreme,
}

/// Advisory safety flag attached to a diet plan
///
/// Flags never block plan creation and never alter the computed target; the
/// presentation layer decides whether to warn or require confirmation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SafetyFlag {
    /// Daily target is below the subject's basal metabolic rate
    BelowBmr,
    /// Daily target is below the sex-specific floor (1200 kcal female /
    /// 1500 kcal male by default)
    BelowSexFloor,
    /// Target is below BMR but BMI >= 30, which clinically relaxes the
    /// below-BMR concern; always accompanies [`SafetyFlag::BelowBmr`]
    ObesityException,
}

/// A calorie plan toward a goal weight
///
/// A pure function of ([`AnalysisResult`], current weight, goal weight,
/// tier selection, engine configuration).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Direction of the weight goal
    pub direction: GoalDirection,
    /// Selected intensity tier; `None` when direction is maintain
    pub tier: Option<IntensityTier>,
    /// Daily calorie target (kcal, rounded to the nearest whole kcal)
    pub daily_calorie_target: i32,
    /// Signed daily kcal delta applied to TDEE (negative for loss,
    /// positive for gain, zero for maintain)
    pub daily_delta_kcal: f64,
    /// Advisory safety flags; empty when no concern was detected
    pub safety_flags: Vec<SafetyFlag>,
    /// Expected weeks until the goal weight is reached; `None` when
    /// direction is maintain
    pub estimated_weeks_to_goal: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_weight_range_midpoint() {
        let range = IdealWeightRange {
            min_kg: 56.0,
            max_kg: 76.0,
        };
        assert!((range.midpoint_kg() - 66.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subject_builder_defaults_circumferences_to_not_provided() {
        let subject = Subject::new(Sex::Female, 80.0, 170.0, 30);
        assert!((subject.waist_cm - 0.0).abs() < f64::EPSILON);
        assert!((subject.hip_cm - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_models_round_trip_through_json() {
        let subject = Subject::new(Sex::Male, 95.0, 175.0, 40).with_circumferences(102.0, 104.0);
        let json = serde_json::to_string(&subject).unwrap();
        let back: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(subject, back);
    }
}
