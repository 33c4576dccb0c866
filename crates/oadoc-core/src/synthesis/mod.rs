//! Example synthesis
//!
//! Produces representative payloads for normalized schemas without
//! consulting live data. Results carry their provenance so renderers can
//! flag generated examples as non-authoritative.

pub mod example;
pub mod primitives;
pub mod synthesizer;

pub use example::{Example, Provenance, SynthesisWarning};
pub use synthesizer::{ExampleSynthesizer, SynthesisConfig};
