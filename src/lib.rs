//! Core library for one-dimensional elementary cellular automata.

pub mod driver;
pub mod enc;
pub mod engine;
pub mod error;
pub mod render;
pub mod seed;

pub use driver::{Control, Driver};
pub use enc::{Digits, Glyphs, RowCodec, RunLengthEncoded};
pub use engine::{GenerationEngine, RowWindow, RuleTable};
pub use error::{AutomatonError, Result};
pub use render::{LedStripRenderer, PixelSink, Renderer, Rgb, TextRenderer};
pub use seed::Seed;
