// Wed Oct 14 2026 - Alex

pub mod location;
pub mod undecorate;

pub use location::check_location;
pub use undecorate::undecorate;
