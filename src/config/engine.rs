// ABOUTME: Engine configuration surface with clinical defaults, env overrides, and validation
// ABOUTME: Defines EngineConfig, BmrConfig, ActivityFactorsConfig, IdealWeightFormula, TierTable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Engine Configuration Module
//!
//! Type-safe configuration for the analysis and planning pipeline. All
//! clinically meaningful knobs live here as named, overridable values
//! instead of literals scattered through the calculation code: the ideal
//! weight formula selection, the water coefficient, the intensity tier
//! tables, the kcal-per-kg energy density, the safety floors, and the
//! Mifflin-St Jeor coefficients.
//!
//! The engine never reads configuration globally. Callers construct an
//! [`EngineConfig`] (usually [`EngineConfig::default`] or
//! [`EngineConfig::from_env`]) and pass it by reference into
//! [`crate::engine::analyze`] and [`crate::engine::plan`], keeping every
//! call reentrant and testable.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (applied by [`EngineConfig::from_env`]):
//!    ```bash
//!    export SAGE_INTAKE_IDEAL_WEIGHT_FORMULA=hamwi
//!    export SAGE_INTAKE_WATER_COEFFICIENT=0.033
//!    export SAGE_INTAKE_SAFE_FLOOR_FEMALE=1100
//!    ```
//!
//! 2. Default values (if env vars not set)

use crate::engine::macros::MacroDistribution;
use crate::engine::physiological_constants::{activity, bmr, energy, safety, tiers};
use crate::errors::{EngineError, EngineResult};
use crate::models::{ActivityLevel, IntensityTier, Sex};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific additive constant
    #[must_use]
    pub const fn sex_constant(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: bmr::WEIGHT_COEF,
            msj_height_coef: bmr::HEIGHT_COEF,
            msj_age_coef: bmr::AGE_COEF,
            msj_male_constant: bmr::MALE_CONSTANT,
            msj_female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
/// *Exercise Physiology*. Every factor must exceed 1.0: total expenditure
/// is never below basal expenditure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("sedentary", self.sedentary),
            ("lightly_active", self.lightly_active),
            ("moderately_active", self.moderately_active),
            ("very_active", self.very_active),
            ("extra_active", self.extra_active),
        ]
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity::SEDENTARY,
            lightly_active: activity::LIGHTLY_ACTIVE,
            moderately_active: activity::MODERATELY_ACTIVE,
            very_active: activity::VERY_ACTIVE,
            extra_active: activity::EXTRA_ACTIVE,
        }
    }
}

/// Selectable ideal-weight formula
///
/// The source material never reconciles which formula is authoritative, so
/// the engine exposes the choice as a strategy: the healthy-BMI band is the
/// default, Hamwi and Robinson are selectable variants.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdealWeightFormula {
    /// Healthy-BMI band [18.5, 24.9] expressed in kg for the height
    #[default]
    BmiBand,
    /// Hamwi (1964) point estimate expanded to a ±10% range
    Hamwi,
    /// Robinson (1983) point estimate expanded to a ±10% range
    Robinson,
}

impl FromStr for IdealWeightFormula {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bmi_band" => Ok(Self::BmiBand),
            "hamwi" => Ok(Self::Hamwi),
            "robinson" => Ok(Self::Robinson),
            other => Err(EngineError::config_invalid(format!(
                "unknown ideal weight formula '{other}' (expected bmi_band, hamwi, or robinson)"
            ))),
        }
    }
}

/// Ordered mapping from intensity tier to a daily kcal delta magnitude
///
/// Magnitudes are stored positive; the planner subtracts for loss plans and
/// adds for gain plans. A tier absent from the table cannot be requested:
/// asking for it is a configuration error, which is how the default gain
/// table excludes [`IntensityTier::Extreme`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierTable {
    entries: Vec<(IntensityTier, f64)>,
}

impl TierTable {
    /// Build a table from (tier, kcal/day magnitude) pairs, preserving order
    #[must_use]
    pub fn new(entries: Vec<(IntensityTier, f64)>) -> Self {
        Self { entries }
    }

    /// Build a table from weekly body-mass rates via the kcal-per-kg rule
    ///
    /// A 0.25 kg/week pace at 7700 kcal/kg becomes 275 kcal/day. This is
    /// how rate-labeled tier menus ("0.5 kg per week") map onto daily
    /// deltas.
    #[must_use]
    pub fn from_weekly_rates(rates: &[(IntensityTier, f64)], kcal_per_kg: f64) -> Self {
        let entries = rates
            .iter()
            .map(|&(tier, kg_per_week)| {
                (tier, kg_per_week * kcal_per_kg / energy::DAYS_PER_WEEK)
            })
            .collect();
        Self { entries }
    }

    /// Daily kcal delta magnitude for the tier, if present
    #[must_use]
    pub fn delta_kcal(&self, tier: IntensityTier) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_tier, _)| *entry_tier == tier)
            .map(|&(_, delta)| delta)
    }

    /// Tiers in table order
    pub fn tiers(&self) -> impl Iterator<Item = IntensityTier> + '_ {
        self.entries.iter().map(|&(tier, _)| tier)
    }

    /// Default loss table: 250 / 500 / 750 / 1000 kcal/day
    #[must_use]
    pub fn default_loss() -> Self {
        Self::new(vec![
            (IntensityTier::Light, tiers::LIGHT_KCAL),
            (IntensityTier::Standard, tiers::STANDARD_KCAL),
            (IntensityTier::Aggressive, tiers::AGGRESSIVE_KCAL),
            (IntensityTier::Extreme, tiers::EXTREME_KCAL),
        ])
    }

    /// Default gain table: 250 / 500 / 750 kcal/day (no extreme surplus)
    #[must_use]
    pub fn default_gain() -> Self {
        Self::new(vec![
            (IntensityTier::Light, tiers::LIGHT_KCAL),
            (IntensityTier::Standard, tiers::STANDARD_KCAL),
            (IntensityTier::Aggressive, tiers::AGGRESSIVE_KCAL),
        ])
    }

    fn validate(&self, label: &str) -> EngineResult<()> {
        if self.entries.is_empty() {
            return Err(EngineError::config_missing(format!(
                "{label} tier table has no entries"
            )));
        }
        for (tier, delta) in &self.entries {
            if *delta <= 0.0 {
                return Err(EngineError::config_invalid(format!(
                    "{label} tier delta must be a positive kcal magnitude, {tier:?} maps to {delta}"
                )));
            }
        }
        for (index, (tier, _)) in self.entries.iter().enumerate() {
            if self.entries[..index].iter().any(|(seen, _)| seen == tier) {
                return Err(EngineError::config_invalid(format!(
                    "{label} tier table lists {tier:?} more than once"
                )));
            }
        }
        Ok(())
    }
}

/// Complete configuration surface for the intake engine
///
/// [`EngineConfig::default`] is the canonical clinical configuration; every
/// value can be overridden per deployment. Invalid configurations are
/// rejected by [`EngineConfig::validate`], which the pipeline entry points
/// run before any calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Which ideal-weight formula the resolver uses
    pub ideal_weight_formula: IdealWeightFormula,
    /// Daily water requirement coefficient (liters per kg actual weight)
    pub water_coefficient_l_per_kg: f64,
    /// Loss tier table (kcal/day deficit magnitudes)
    pub loss_tiers: TierTable,
    /// Gain tier table (kcal/day surplus magnitudes)
    pub gain_tiers: TierTable,
    /// Energy density of body-mass change (kcal per kg)
    pub kcal_per_kg_body_mass: f64,
    /// Safety floor for female subjects (kcal/day)
    pub safe_floor_female_kcal: i32,
    /// Safety floor for male subjects (kcal/day)
    pub safe_floor_male_kcal: i32,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE activity factors
    pub activity_factors: ActivityFactorsConfig,
    /// Default macronutrient distribution
    pub macros: MacroDistribution,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ideal_weight_formula: IdealWeightFormula::default(),
            water_coefficient_l_per_kg: energy::DEFAULT_WATER_COEFFICIENT_L_PER_KG,
            loss_tiers: TierTable::default_loss(),
            gain_tiers: TierTable::default_gain(),
            kcal_per_kg_body_mass: energy::KCAL_PER_KG_BODY_MASS,
            safe_floor_female_kcal: safety::FEMALE_FLOOR_KCAL,
            safe_floor_male_kcal: safety::MALE_FLOOR_KCAL,
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            macros: MacroDistribution::default(),
        }
    }
}

impl EngineConfig {
    /// Safety floor for the given sex (kcal/day)
    #[must_use]
    pub const fn safe_floor_kcal(&self, sex: Sex) -> i32 {
        match sex {
            Sex::Female => self.safe_floor_female_kcal,
            Sex::Male => self.safe_floor_male_kcal,
        }
    }

    /// Load configuration from environment variables over the defaults
    ///
    /// Recognized overrides: `SAGE_INTAKE_IDEAL_WEIGHT_FORMULA`,
    /// `SAGE_INTAKE_WATER_COEFFICIENT`, `SAGE_INTAKE_KCAL_PER_KG`,
    /// `SAGE_INTAKE_SAFE_FLOOR_FEMALE`, `SAGE_INTAKE_SAFE_FLOOR_MALE`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the resulting
    /// configuration fails validation; invalid overrides are never
    /// silently discarded
    pub fn from_env() -> EngineResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("SAGE_INTAKE_IDEAL_WEIGHT_FORMULA") {
            config.ideal_weight_formula = raw.parse()?;
        }
        if let Ok(raw) = env::var("SAGE_INTAKE_WATER_COEFFICIENT") {
            config.water_coefficient_l_per_kg = parse_f64("SAGE_INTAKE_WATER_COEFFICIENT", &raw)?;
        }
        if let Ok(raw) = env::var("SAGE_INTAKE_KCAL_PER_KG") {
            config.kcal_per_kg_body_mass = parse_f64("SAGE_INTAKE_KCAL_PER_KG", &raw)?;
        }
        if let Ok(raw) = env::var("SAGE_INTAKE_SAFE_FLOOR_FEMALE") {
            config.safe_floor_female_kcal = parse_i32("SAGE_INTAKE_SAFE_FLOOR_FEMALE", &raw)?;
        }
        if let Ok(raw) = env::var("SAGE_INTAKE_SAFE_FLOOR_MALE") {
            config.safe_floor_male_kcal = parse_i32("SAGE_INTAKE_SAFE_FLOOR_MALE", &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error on the first violated invariant
    pub fn validate(&self) -> EngineResult<()> {
        if self.water_coefficient_l_per_kg <= 0.0 {
            return Err(EngineError::config_invalid(format!(
                "water coefficient must be positive, got {}",
                self.water_coefficient_l_per_kg
            )));
        }
        if self.kcal_per_kg_body_mass <= 0.0 {
            return Err(EngineError::config_invalid(format!(
                "kcal per kg body mass must be positive, got {}",
                self.kcal_per_kg_body_mass
            )));
        }
        if self.safe_floor_female_kcal <= 0 || self.safe_floor_male_kcal <= 0 {
            return Err(EngineError::config_invalid(
                "safety floors must be positive kcal values",
            ));
        }
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(EngineError::config_invalid(
                "Mifflin-St Jeor weight and height coefficients must be positive",
            ));
        }
        for (name, factor) in self.activity_factors.as_pairs() {
            if factor <= 1.0 {
                return Err(EngineError::config_invalid(format!(
                    "activity factor {name} must exceed 1.0, got {factor}"
                )));
            }
        }
        self.loss_tiers.validate("loss")?;
        self.gain_tiers.validate("gain")?;
        self.macros.validate()?;
        Ok(())
    }
}

fn parse_f64(var: &str, raw: &str) -> EngineResult<f64> {
    raw.parse::<f64>().map_err(|e| {
        EngineError::config_invalid(format!("{var} is not a valid number: '{raw}'")).with_source(e)
    })
}

fn parse_i32(var: &str, raw: &str) -> EngineResult<i32> {
    raw.parse::<i32>().map_err(|e| {
        EngineError::config_invalid(format!("{var} is not a valid integer: '{raw}'")).with_source(e)
    })
}
