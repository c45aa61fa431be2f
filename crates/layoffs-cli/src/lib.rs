//! CLI library components for the layoffs cleaner.

pub mod logging;
pub mod pipeline;
pub mod render;
