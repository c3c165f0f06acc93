// Wed Oct 14 2026 - Alex

use crate::map::SkipReason;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-run counters. Gathering them never changes what is written to
/// the definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub symbols_written: usize,
    pub header_found: bool,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Lines read: {}", self.lines_read),
            format!("Symbols exported: {}", self.symbols_written),
            format!("Lines skipped: {}", self.total_skipped()),
        ];

        for reason in SkipReason::ALL {
            let count = self.skipped_for(reason);
            if count > 0 {
                lines.push(format!("  {}: {}", reason, count));
            }
        }

        if !self.header_found {
            lines.push("Publics header not found, no symbols exported".to_string());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_counts() {
        let mut stats = ConversionStats::new();
        stats.record_skip(SkipReason::DllImport);
        stats.record_skip(SkipReason::DllImport);
        stats.record_skip(SkipReason::Inlined);

        assert_eq!(stats.skipped_for(SkipReason::DllImport), 2);
        assert_eq!(stats.skipped_for(SkipReason::EntryPoint), 0);
        assert_eq!(stats.total_skipped(), 3);
    }

    #[test]
    fn test_json_uses_reason_names() {
        let mut stats = ConversionStats::new();
        stats.header_found = true;
        stats.record_skip(SkipReason::StdcallDecorated);

        let json = stats.to_json().unwrap();
        assert!(json.contains("\"stdcall_decorated\": 1"));
        assert!(json.contains("\"header_found\": true"));
    }

    #[test]
    fn test_summary_mentions_missing_header() {
        let stats = ConversionStats::new();
        let lines = stats.summary_lines();
        assert!(lines.iter().any(|l| l.contains("header not found")));
    }
}
