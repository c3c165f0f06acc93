// Wed Oct 14 2026 - Alex

pub mod writer;

pub use writer::{DefWriter, EXPORTS_HEADER};
