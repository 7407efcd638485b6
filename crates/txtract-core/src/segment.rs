//! Splits a statement's line stream into per-transaction line groups

use std::sync::LazyLock;

use regex::Regex;

/// Date line that opens every record, e.g. `Jan 05, 2024`
static RECORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{2}\s[0-9]{2},\s20[0-9]{2}$").expect("valid regex")
});

/// Whether `line` begins a new transaction record
pub fn is_record_start(line: &str) -> bool {
    RECORD_START.is_match(line)
}

/// Iterator over the line groups of a statement.
///
/// Each group is a sub-slice of the input that starts at a record-start line
/// and runs up to (not including) the next one, or to the end of input.
/// Lines before the first record start are skipped.
pub struct RecordGroups<'a, 'l> {
    lines: &'a [&'l str],
    next_start: Option<usize>,
}

impl<'a, 'l> RecordGroups<'a, 'l> {
    pub fn new(lines: &'a [&'l str]) -> Self {
        let next_start = lines.iter().position(|line| is_record_start(line));
        Self { lines, next_start }
    }
}

impl<'a, 'l> Iterator for RecordGroups<'a, 'l> {
    type Item = &'a [&'l str];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let end = self.lines[start + 1..]
            .iter()
            .position(|line| is_record_start(line))
            .map(|offset| start + 1 + offset)
            .unwrap_or(self.lines.len());

        self.next_start = (end < self.lines.len()).then_some(end);
        Some(&self.lines[start..end])
    }
}

/// Segment trimmed, non-empty lines into record groups
pub fn segment<'a, 'l>(lines: &'a [&'l str]) -> RecordGroups<'a, 'l> {
    RecordGroups::new(lines)
}
