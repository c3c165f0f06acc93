// Wed Oct 14 2026 - Alex

pub mod line;
pub mod parser;
pub mod row;

pub use line::MapLine;
pub use parser::{LineOutcome, MapParser, ParserState};
pub use row::classify_row;

use serde::Serialize;
use std::fmt;

/// First token of the column header that opens the publics table.
pub const HEADER_MARKER: &str = "Address";

/// 1-based column holding the public symbol name.
pub const SYMBOL_COLUMN: usize = 2;

/// 1-based column where the linker flags inlined functions.
pub const INLINE_COLUMN: usize = 5;

pub const INLINE_MARKER: &str = "i";

/// Annotation the linker prints for the image entry point.
pub const ENTRY_POINT_MARKER: &str = "entry point at";

/// Why a map file line produced no export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    BeforeHeader,
    HeaderLine,
    NoSymbolColumn,
    EntryPoint,
    TemplateReference,
    StaticRuntime,
    DllImport,
    StdcallDecorated,
    StringLiteral,
    EmptyName,
    Inlined,
    InvalidEncoding,
}

impl SkipReason {
    pub const ALL: [SkipReason; 12] = [
        SkipReason::BeforeHeader,
        SkipReason::HeaderLine,
        SkipReason::NoSymbolColumn,
        SkipReason::EntryPoint,
        SkipReason::TemplateReference,
        SkipReason::StaticRuntime,
        SkipReason::DllImport,
        SkipReason::StdcallDecorated,
        SkipReason::StringLiteral,
        SkipReason::EmptyName,
        SkipReason::Inlined,
        SkipReason::InvalidEncoding,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::BeforeHeader => "before publics header",
            SkipReason::HeaderLine => "publics header",
            SkipReason::NoSymbolColumn => "no symbol column",
            SkipReason::EntryPoint => "entry point annotation",
            SkipReason::TemplateReference => "template reference",
            SkipReason::StaticRuntime => "static C runtime",
            SkipReason::DllImport => "DLL import",
            SkipReason::StdcallDecorated => "stdcall decorated",
            SkipReason::StringLiteral => "string literal",
            SkipReason::EmptyName => "empty name",
            SkipReason::Inlined => "inlined function",
            SkipReason::InvalidEncoding => "not valid UTF-8",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
