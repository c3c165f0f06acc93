// Wed Oct 14 2026 - Alex

pub mod display;

pub use display::ErrorDisplay;
