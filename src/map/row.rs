// Wed Oct 14 2026 - Alex

use super::{MapLine, SkipReason, ENTRY_POINT_MARKER, INLINE_COLUMN, INLINE_MARKER, SYMBOL_COLUMN};
use crate::symbol::{check_location, undecorate};

/// Applies the export rules to one row of the publics table.
///
/// Rules run in column order: the name column is checked against the
/// row annotation and the location column, then undecorated, and the
/// inline marker column can still veto it afterwards.
pub fn classify_row<'a>(line: &MapLine<'a>) -> Result<&'a str, SkipReason> {
    let name = line.column(SYMBOL_COLUMN).ok_or(SkipReason::NoSymbolColumn)?;

    if line.contains(ENTRY_POINT_MARKER) {
        return Err(SkipReason::EntryPoint);
    }

    if let Some(location) = line.last() {
        check_location(location)?;
    }

    let symbol = undecorate(name)?;

    if line.column(INLINE_COLUMN) == Some(INLINE_MARKER) {
        return Err(SkipReason::Inlined);
    }

    if symbol.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Result<&str, SkipReason> {
        classify_row(&MapLine::tokenize(raw))
    }

    #[test]
    fn test_plain_rows() {
        assert_eq!(classify(" 0001:00000000  _foo  0  main.obj"), Ok("foo"));
        assert_eq!(
            classify(" 0001:00000040  mysql_init  00401040 f  libmysql.obj"),
            Ok("mysql_init")
        );
    }

    #[test]
    fn test_decorated_rows() {
        assert_eq!(
            classify(" 0001:00000010  _bar@4  0  main.obj"),
            Err(SkipReason::StdcallDecorated)
        );
        assert_eq!(
            classify(" 0002:00000000  ??_C@_02OEFFHCOD@hi?$AA@  0  main.obj"),
            Err(SkipReason::StringLiteral)
        );
    }

    #[test]
    fn test_location_filters() {
        assert_eq!(
            classify(" 0003:00000000  __imp__Sleep@4  0  kernel32:KERNEL32.dll"),
            Err(SkipReason::DllImport)
        );
        assert_eq!(
            classify(" 0001:00000000  _strlen  0  LIBCMT:strlen.obj"),
            Err(SkipReason::StaticRuntime)
        );
        assert_eq!(
            classify(" 0001:00000000  _x  0  <linker-defined>"),
            Err(SkipReason::TemplateReference)
        );
    }

    #[test]
    fn test_entry_point_annotation() {
        assert_eq!(
            classify(" entry point at        0001:000123a0"),
            Err(SkipReason::EntryPoint)
        );
    }

    #[test]
    fn test_inline_marker_in_fifth_column() {
        assert_eq!(
            classify(" 0001:00000000  _foo  00401000  f  i  main.obj"),
            Err(SkipReason::Inlined)
        );
        // The marker only counts in its own column.
        assert_eq!(classify(" 0001:00000000  _foo  i  main.obj"), Ok("foo"));
    }

    #[test]
    fn test_short_rows() {
        assert_eq!(classify(""), Err(SkipReason::NoSymbolColumn));
        assert_eq!(classify(" 0001:00000000"), Err(SkipReason::NoSymbolColumn));
        assert_eq!(classify(" 0001:00000000 _"), Err(SkipReason::EmptyName));
    }
}
