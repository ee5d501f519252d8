//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for Trellis architecture
//! models. It includes:
//!
//! - **Semantic**: The cross-referenced model of classes and interfaces
//!   ([`semantic`] module), produced by the parser and consumed read-only
//!   by renderers.

pub mod semantic;
