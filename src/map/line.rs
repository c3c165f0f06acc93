// Wed Oct 14 2026 - Alex

/// One line of a map file split into its space separated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLine<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> MapLine<'a> {
    /// Splits on single spaces and drops the empty pieces runs of spaces
    /// leave behind. Tabs are not separators.
    pub fn tokenize(raw: &'a str) -> Self {
        let raw = raw.strip_suffix('\n').unwrap_or(raw);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let tokens = raw.split(' ').filter(|t| !t.is_empty()).collect();
        Self { raw, tokens }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Column by 1-based position, matching the map file layout.
    pub fn column(&self, position: usize) -> Option<&'a str> {
        position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index).copied())
    }

    pub fn first(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.tokens.last().copied()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.raw.contains(needle)
    }
}
