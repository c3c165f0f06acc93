// Wed Oct 14 2026 - Alex

use super::{classify_row, MapLine, SkipReason, HEADER_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    SeekingHeader,
    Emitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Header,
    Symbol(&'a str),
    Skipped(SkipReason),
}

/// Header-gated line parser. The only state carried between lines is
/// whether the publics header has been seen; it is set once and never
/// cleared.
#[derive(Debug)]
pub struct MapParser {
    state: ParserState,
}

impl MapParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::SeekingHeader,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn header_found(&self) -> bool {
        self.state == ParserState::Emitting
    }

    pub fn feed<'a>(&mut self, raw: &'a str) -> LineOutcome<'a> {
        let line = MapLine::tokenize(raw);

        match self.state {
            ParserState::SeekingHeader => {
                if line.first() == Some(HEADER_MARKER) {
                    self.state = ParserState::Emitting;
                    log::debug!("publics header found: {:?}", line.raw());
                    LineOutcome::Header
                } else {
                    LineOutcome::Skipped(SkipReason::BeforeHeader)
                }
            }
            ParserState::Emitting => match classify_row(&line) {
                Ok(symbol) => LineOutcome::Symbol(symbol),
                Err(reason) => {
                    log::trace!("skipped ({}): {:?}", reason, line.raw());
                    LineOutcome::Skipped(reason)
                }
            },
        }
    }
}

impl Default for MapParser {
    fn default() -> Self {
        Self::new()
    }
}
