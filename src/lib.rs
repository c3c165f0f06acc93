// Wed Oct 14 2026 - Alex

pub mod config;
pub mod converter;
pub mod def;
pub mod error;
pub mod map;
pub mod output;
pub mod symbol;
pub mod ui;

pub use config::Config;
pub use converter::{convert, def_path_for, Conversion, MapToDefConverter};
pub use def::DefWriter;
pub use error::{ConvertError, Result};
pub use map::{MapParser, SkipReason};
pub use output::ConversionStats;
