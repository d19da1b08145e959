//! # attribind demos
//!
//! Sample vertex formats bound through attribind.
//!
//! ## Binaries
//!
//! - `layout_inspect` - Prints the attribute calls derived for each sample format

pub mod formats;

pub use formats::SampleFormat;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
