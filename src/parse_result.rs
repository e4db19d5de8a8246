use crate::error::AnalyzeError;
use crate::models::AccessRecord;

/// One line that failed structural or type validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedLine {
    /// One-based line number within the source file
    pub line_number: usize,
    pub error: AnalyzeError,
}

/// Result of parsing one file's full content.
///
/// Records keep their original line order. Malformed lines are collected for
/// diagnostics instead of aborting the file; blank lines are counted but not
/// treated as malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileParseResult {
    pub records: Vec<AccessRecord>,
    pub malformed: Vec<MalformedLine>,
    pub blank_lines: usize,
}

impl FileParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_record(&mut self, record: AccessRecord) {
        self.records.push(record);
    }

    pub fn push_malformed(&mut self, line_number: usize, error: AnalyzeError) {
        self.malformed.push(MalformedLine { line_number, error });
    }

    /// Total lines that carried content, well-formed or not.
    pub fn content_lines(&self) -> usize {
        self.records.len() + self.malformed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lines_counts_both_outcomes() {
        let mut result = FileParseResult::new();
        result.push_malformed(3, AnalyzeError::InsufficientTokens { found: 2, required: 10 });
        result.blank_lines = 2;
        assert_eq!(result.content_lines(), 1);
        assert_eq!(result.malformed[0].line_number, 3);
    }
}
