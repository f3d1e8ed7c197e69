#![doc = include_str!("../README.md")]

pub(crate) mod bar;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod render;
pub(crate) mod style;
pub(crate) mod term;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::bar::Bar;
    pub use crate::config::Config;
    pub use crate::error::{ConfigError, Error, ValidationError};
    pub use crate::render::BarRenderer;
    pub use crate::term::{AnsiTerm, Term};
}

pub use crate::prelude::*;
