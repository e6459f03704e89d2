//! Housing Operations Engine
//!
//! This crate computes salary ledgers, housing occupancy and its severity
//! bands, department headcount shares and hourly attendance buckets for a
//! worker housing and HR administration system, and serves them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
