pub mod models;
pub mod error;
pub mod statistics;
pub mod parse_result;
pub mod parsers;
pub mod report;
pub mod cli;
pub mod commands;

pub use models::{AccessRecord, StatRequest};
pub use error::AnalyzeError;
pub use parse_result::{FileParseResult, MalformedLine};
pub use parsers::{LogFileParser, ParserRegistry, WhitespaceParser};
pub use report::{BuiltReport, Report, ReportBuilder};
