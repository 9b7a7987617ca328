//! Test helpers shared across Nexus crates.

pub mod generator;

pub use generator::{
    FailingGenerator, FixedGenerator, RecordedChat, RecordingGenerator, StreamingGenerator,
};
