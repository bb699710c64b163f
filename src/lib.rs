//! AHP Sherpa - Analytic Hierarchy Process solver
//!
//! This crate derives priority weights from pairwise comparison matrices,
//! repairs inconsistent judgments automatically, and ranks the alternatives
//! of a multi-criteria decision.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
