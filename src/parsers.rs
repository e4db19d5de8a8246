use std::collections::HashMap;

use crate::error::AnalyzeError;
use crate::parse_result::FileParseResult;

/// Common interface for all file-level log parsers
pub trait LogFileParser: Send + Sync {
    /// Parse one file's full content into ordered records plus diagnostics.
    fn parse_file(&self, content: &str) -> FileParseResult;

    /// Format identifier this parser is registered under.
    fn format_name(&self) -> &'static str;
}

// Re-export individual parser modules
pub mod whitespace;

pub use whitespace::WhitespaceParser;

/// Registry mapping a format identifier to its parser.
///
/// Resolved once at startup; adding a format means registering another
/// `LogFileParser` implementation, call sites stay untouched.
pub struct ParserRegistry {
    parsers: HashMap<&'static str, Box<dyn LogFileParser>>,
}

impl ParserRegistry {
    /// Registry pre-loaded with every built-in format.
    pub fn builtin() -> Self {
        let mut registry = Self { parsers: HashMap::new() };
        registry.register(Box::new(WhitespaceParser::new()));
        registry
    }

    pub fn register(&mut self, parser: Box<dyn LogFileParser>) {
        self.parsers.insert(parser.format_name(), parser);
    }

    /// Look up a parser by format name.
    pub fn get(&self, format: &str) -> Result<&dyn LogFileParser, AnalyzeError> {
        self.parsers
            .get(format)
            .map(|p| p.as_ref())
            .ok_or_else(|| AnalyzeError::UnknownFormat {
                requested: format.to_string(),
                available: self.format_names(),
            })
    }

    /// Sorted list of registered format names.
    pub fn format_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.parsers.keys().map(|k| k.to_string()).collect();
        names.sort();
        names
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
