//! Shield-and-lock icon generator for browser extension packaging.
//!
//! [`icon::render_icon`] rasterizes one size, [`generate::generate_icons`]
//! runs the full batch into `icons/`.

pub mod config;
pub mod draw;
pub mod error;
pub mod generate;
pub mod icon;
pub mod logger;
pub mod status;

pub use error::{Error, Result};
