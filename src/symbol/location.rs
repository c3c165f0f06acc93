// Wed Oct 14 2026 - Alex

use crate::map::SkipReason;

/// Name of the static multithreaded C runtime library.
pub const STATIC_RUNTIME: &str = "LIBCMT";

pub const DLL_SUFFIX: &str = ".DLL";

/// Checks the last column of a row (the `lib:object` the symbol came
/// from). Symbols pulled from the static CRT, from DLL import libraries
/// or from linker defined `<...>` pseudo objects are not ours to export.
pub fn check_location(location: &str) -> Result<(), SkipReason> {
    if location.contains('<') {
        return Err(SkipReason::TemplateReference);
    }
    if location.contains(STATIC_RUNTIME) {
        return Err(SkipReason::StaticRuntime);
    }
    if location.to_uppercase().contains(DLL_SUFFIX) {
        return Err(SkipReason::DllImport);
    }
    Ok(())
}
