// Wed Oct 14 2026 - Alex

use crate::map::SkipReason;

/// Prefix MSVC gives to the symbols of string literals.
pub const STRING_LITERAL_PREFIX: &str = "??_C@_";

/// Turns a public name from the map into the name the definition file
/// exports, or rejects it.
///
/// `_name` is a cdecl C symbol and loses its underscore. `_name@N` is
/// stdcall and has no undecorated export name, so it is dropped, as are
/// compiler generated string literals. Anything else passes unchanged.
pub fn undecorate(name: &str) -> Result<&str, SkipReason> {
    if let Some(stripped) = name.strip_prefix('_') {
        if name.contains('@') {
            Err(SkipReason::StdcallDecorated)
        } else {
            Ok(stripped)
        }
    } else if name.starts_with(STRING_LITERAL_PREFIX) {
        Err(SkipReason::StringLiteral)
    } else {
        Ok(name)
    }
}
