//! Thermal systems models.
//!
//! This module contains models for heat transfer in electrical and thermal
//! equipment.

pub mod conductor;
