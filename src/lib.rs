//! Data Visualizer - synthetic data patterns, summary statistics and chart export
//!
//! Every parameter change runs one render pass: the series is regenerated from a
//! fixed seed, summarized, encoded for the chosen chart kind and serialized to CSV.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod params;
pub mod pipeline;
pub mod stats;
pub mod telemetry;
