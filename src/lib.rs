//! Fixture Gen - large test fixture file generator
//!
//! Writes a repeating text chunk into a file until it reaches a target size,
//! then reports the final size. The file never falls short of the target and
//! overshoots it by less than one chunk.

pub mod cli;
pub mod generator;

pub use generator::{
    generate, generate_fixture, plan_fixture, report_size, Chunk, FixtureReport,
    GeneratorConfig, GeneratorError, SizeReport,
};
