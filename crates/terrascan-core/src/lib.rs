//! Core types and definitions for the TERRASCAN terrain analyzer.
//!
//! This crate defines the vocabulary shared across the other crates:
//! grid coordinates, contour levels, physical map scale, display
//! configuration, and constants. It has no dependency on any image or
//! rendering framework.

pub mod config;
pub mod constants;
pub mod types;
