// ABOUTME: Menu composition arithmetic over portioned food items
// ABOUTME: Sums calories and macros for a composed menu and compares against plan targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Menu Composition
//!
//! Pure aggregation over a composed menu: each entry is a food item scaled
//! by a portion multiplier, and the summary reports totals plus signed
//! deltas against the plan's calorie target and macro gram targets. The
//! food catalog is caller-supplied data: a real deployment feeds rows
//! from its own food database; [`reference_foods`] ships a small staple
//! table for tests, demos, and benchmarks.

use crate::engine::macros::MacroTargets;
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Nutrition values for one portion of a food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Energy per portion (kcal)
    pub kcal: f64,
    /// Protein per portion (grams)
    pub protein_g: f64,
    /// Carbohydrate per portion (grams)
    pub carbs_g: f64,
    /// Fat per portion (grams)
    pub fat_g: f64,
}

impl FoodItem {
    /// Create a food item from per-portion nutrition values
    pub fn new(
        name: impl Into<String>,
        kcal: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kcal,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

/// One line of a composed menu: a food item and a portion multiplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    /// The food being served
    pub food: FoodItem,
    /// Portion multiplier (must be positive; 0.5 = half portion)
    pub portions: f64,
}

impl MenuEntry {
    /// Create a menu entry
    #[must_use]
    pub const fn new(food: FoodItem, portions: f64) -> Self {
        Self { food, portions }
    }
}

/// Totals and target deltas for a composed menu
///
/// Deltas are signed `total - target`: negative means the menu is under
/// target, positive means over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuSummary {
    /// Total energy (kcal)
    pub total_kcal: f64,
    /// Total protein (grams)
    pub total_protein_g: f64,
    /// Total carbohydrate (grams)
    pub total_carbs_g: f64,
    /// Total fat (grams)
    pub total_fat_g: f64,
    /// Energy delta against the daily calorie target (kcal)
    pub kcal_delta: f64,
    /// Protein delta against the macro target (grams)
    pub protein_delta_g: f64,
    /// Carbohydrate delta against the macro target (grams)
    pub carbs_delta_g: f64,
    /// Fat delta against the macro target (grams)
    pub fat_delta_g: f64,
}

impl MenuSummary {
    /// Sum a composed menu and compare it against plan targets
    ///
    /// # Errors
    ///
    /// Returns a validation error when any entry has a non-positive
    /// portion multiplier
    pub fn from_entries(
        entries: &[MenuEntry],
        daily_calorie_target: f64,
        targets: &MacroTargets,
    ) -> EngineResult<Self> {
        for entry in entries {
            if entry.portions <= 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "portion multiplier for '{}' must be positive, got {}",
                    entry.food.name, entry.portions
                )));
            }
        }

        let mut total_kcal = 0.0;
        let mut total_protein_g = 0.0;
        let mut total_carbs_g = 0.0;
        let mut total_fat_g = 0.0;
        for entry in entries {
            total_kcal += entry.food.kcal * entry.portions;
            total_protein_g += entry.food.protein_g * entry.portions;
            total_carbs_g += entry.food.carbs_g * entry.portions;
            total_fat_g += entry.food.fat_g * entry.portions;
        }

        Ok(Self {
            total_kcal,
            total_protein_g,
            total_carbs_g,
            total_fat_g,
            kcal_delta: total_kcal - daily_calorie_target,
            protein_delta_g: total_protein_g - targets.protein_g,
            carbs_delta_g: total_carbs_g - targets.carbs_g,
            fat_delta_g: total_fat_g - targets.fat_g,
        })
    }
}

/// Built-in staple-food reference table
///
/// Thirteen everyday foods with per-portion nutrition rows. This is test
/// and demo data, not a nutrition database.
#[must_use]
pub fn reference_foods() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Boiled egg (1)", 75.0, 6.3, 0.6, 5.3),
        FoodItem::new("Rolled oats (100 g)", 370.0, 13.0, 59.0, 7.0),
        FoodItem::new("Chicken breast (100 g)", 165.0, 31.0, 0.0, 3.6),
        FoodItem::new("Cooked rice (100 g)", 130.0, 2.7, 28.0, 0.3),
        FoodItem::new("Olive oil (1 tsp)", 40.0, 0.0, 0.0, 4.5),
        FoodItem::new("Garden salad, no dressing (bowl)", 25.0, 1.0, 4.0, 0.0),
        FoodItem::new("Apple (medium)", 52.0, 0.3, 14.0, 0.2),
        FoodItem::new("Whole wheat bread (1 slice)", 69.0, 3.5, 11.0, 1.0),
        FoodItem::new("Whole milk yogurt (bowl)", 120.0, 6.0, 9.0, 6.0),
        FoodItem::new("Walnut (1)", 26.0, 0.6, 0.6, 2.5),
        FoodItem::new("White cheese (30 g)", 50.0, 5.0, 1.0, 3.0),
        FoodItem::new("Banana (medium)", 105.0, 1.3, 27.0, 0.4),
        FoodItem::new("Lentil soup (bowl)", 150.0, 9.0, 20.0, 3.0),
    ]
}
