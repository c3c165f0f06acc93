// Wed Oct 14 2026 - Alex

pub mod stats;

pub use stats::ConversionStats;
