pub mod app;
pub mod artifacts;
pub mod config;
pub mod input;
pub mod pipeline;
pub mod render;

pub use pipeline::{Pipeline, PipelineObserver};
