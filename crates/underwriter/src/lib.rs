//! Vehicle-loan underwriting pipeline.
//!
//! The library exposes six independently invocable components: input
//! validation, a risk scorer, a comprehensive risk evaluator, a financing
//! term calculator, a decision generator, and read-only vehicle reference
//! data. Each component takes a flat JSON argument map, runs a pure
//! computation over static lookup tables, and returns a self-contained,
//! serializable result. No state survives a call.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod underwriting;
