// ABOUTME: Configuration module for the intake engine
// ABOUTME: Re-exports the EngineConfig surface and its component config types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Configuration management for the intake engine
//!
//! The engine holds no global configuration state: callers build an
//! [`EngineConfig`] once and pass it by reference into every pipeline call.

/// Engine configuration surface and component config types
pub mod engine;

pub use self::engine::{
    ActivityFactorsConfig, BmrConfig, EngineConfig, IdealWeightFormula, TierTable,
};
