// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides the recurring intake scenarios used across test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

#![allow(dead_code)] // Each integration test binary uses a subset of the fixtures

use sage_intake::config::EngineConfig;
use sage_intake::models::{Sex, Subject};

/// 30-year-old female, 170 cm, 80 kg: overweight, actual-weight branch
#[must_use]
pub fn overweight_female() -> Subject {
    Subject::new(Sex::Female, 80.0, 170.0, 30)
}

/// 40-year-old male, 175 cm, 95 kg: obese, adjusted-weight branch
#[must_use]
pub fn obese_male() -> Subject {
    Subject::new(Sex::Male, 95.0, 175.0, 40)
}

/// 45-year-old female, 160 cm, 55 kg: small subject near the safety floor
#[must_use]
pub fn petite_female() -> Subject {
    Subject::new(Sex::Female, 55.0, 160.0, 45)
}

/// Canonical clinical configuration
#[must_use]
pub fn default_config() -> EngineConfig {
    EngineConfig::default()
}
