use crate::error::AnalyzeError;
use crate::models::AccessRecord;
use crate::parse_result::FileParseResult;
use crate::parsers::LogFileParser;

/// Minimum token count for a well-formed line
const REQUIRED_TOKENS: usize = 10;

/// Parser for the whitespace-delimited access-log format.
///
/// Each line carries at least ten tokens in fixed positional order:
/// timestamp, header size, client address, response code, response size,
/// request method, URL, username, destination address, response type.
/// Tokens past the tenth are ignored.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceParser;

impl WhitespaceParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one line into a record.
    ///
    /// Splitting on whitespace collapses repeated separators, so empty
    /// tokens never reach the positional mapping. Pure function; a failure
    /// never yields a partial record.
    pub fn parse_line(&self, line: &str) -> Result<AccessRecord, AnalyzeError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < REQUIRED_TOKENS {
            return Err(AnalyzeError::InsufficientTokens {
                found: tokens.len(),
                required: REQUIRED_TOKENS,
            });
        }

        let timestamp: f64 = tokens[0]
            .parse()
            .map_err(|_| AnalyzeError::InvalidTimestamp { token: tokens[0].to_string() })?;
        let header_size: u64 = tokens[1].parse().map_err(|_| AnalyzeError::InvalidByteCount {
            field: "header size".to_string(),
            token: tokens[1].to_string(),
        })?;
        let response_size: u64 = tokens[4].parse().map_err(|_| AnalyzeError::InvalidByteCount {
            field: "response size".to_string(),
            token: tokens[4].to_string(),
        })?;

        Ok(AccessRecord {
            timestamp,
            header_size,
            client_ip: tokens[2].to_string(),
            response_code: tokens[3].to_string(),
            response_size,
            request_method: tokens[5].to_string(),
            url: tokens[6].to_string(),
            username: tokens[7].to_string(),
            destination_ip: tokens[8].to_string(),
            response_type: tokens[9].to_string(),
        })
    }
}

impl LogFileParser for WhitespaceParser {
    fn parse_file(&self, content: &str) -> FileParseResult {
        let mut result = FileParseResult::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                result.blank_lines += 1;
                continue;
            }
            match self.parse_line(line) {
                Ok(record) => result.push_record(record),
                Err(error) => result.push_malformed(index + 1, error),
            }
        }

        result
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const VALID_LINE: &str =
        "1157689312.049 5006 10.105.21.199 TCP_MISS/200 19763 CONNECT login.yahoo.com:443 badeyek DIRECT/209.73.177.115 -";

    #[test]
    fn test_parse_line_maps_fields_positionally() {
        let parser = WhitespaceParser::new();
        let record = parser.parse_line(VALID_LINE).unwrap();

        assert_eq!(record.timestamp, 1157689312.049);
        assert_eq!(record.header_size, 5006);
        assert_eq!(record.client_ip, "10.105.21.199");
        assert_eq!(record.response_code, "TCP_MISS/200");
        assert_eq!(record.response_size, 19763);
        assert_eq!(record.request_method, "CONNECT");
        assert_eq!(record.url, "login.yahoo.com:443");
        assert_eq!(record.username, "badeyek");
        assert_eq!(record.destination_ip, "DIRECT/209.73.177.115");
        assert_eq!(record.response_type, "-");
    }

    #[test]
    fn test_parse_line_collapses_repeated_whitespace() {
        let parser = WhitespaceParser::new();
        let spaced = "10.5   100  1.2.3.4  200 300 GET /index.html  alice  5.6.7.8\ttext/html";
        let record = parser.parse_line(spaced).unwrap();
        assert_eq!(record.header_size, 100);
        assert_eq!(record.response_type, "text/html");
    }

    #[test]
    fn test_parse_line_ignores_trailing_tokens() {
        let parser = WhitespaceParser::new();
        let line = format!("{} extra tokens here", VALID_LINE);
        let record = parser.parse_line(&line).unwrap();
        assert_eq!(record.response_type, "-");
    }

    #[test]
    fn test_parse_line_rejects_short_lines() {
        let parser = WhitespaceParser::new();
        match parser.parse_line("10.5 100 1.2.3.4 200 300") {
            Err(AnalyzeError::InsufficientTokens { found, required }) => {
                assert_eq!(found, 5);
                assert_eq!(required, 10);
            }
            other => panic!("expected InsufficientTokens, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_rejects_bad_numerics() {
        let parser = WhitespaceParser::new();

        let bad_ts = "now 100 1.2.3.4 200 300 GET / alice 5.6.7.8 text/html";
        assert!(matches!(
            parser.parse_line(bad_ts),
            Err(AnalyzeError::InvalidTimestamp { .. })
        ));

        let bad_header = "10.5 big 1.2.3.4 200 300 GET / alice 5.6.7.8 text/html";
        match parser.parse_line(bad_header) {
            Err(AnalyzeError::InvalidByteCount { field, token }) => {
                assert_eq!(field, "header size");
                assert_eq!(token, "big");
            }
            other => panic!("expected InvalidByteCount, got {:?}", other),
        }

        let bad_response = "10.5 100 1.2.3.4 200 -300 GET / alice 5.6.7.8 text/html";
        match parser.parse_line(bad_response) {
            Err(AnalyzeError::InvalidByteCount { field, token }) => {
                assert_eq!(field, "response size");
                assert_eq!(token, "-300");
            }
            other => panic!("expected InvalidByteCount, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_keeps_response_code_verbatim() {
        let parser = WhitespaceParser::new();
        let line = "10.5 100 1.2.3.4 007 300 GET / alice 5.6.7.8 text/html";
        assert_eq!(parser.parse_line(line).unwrap().response_code, "007");
    }

    #[test]
    fn test_parse_file_mixed_lines() {
        let parser = WhitespaceParser::new();
        let content = "\
10.0 100 1.1.1.1 200 200 GET /a u 9.9.9.9 text/html

too short
12.0 100 2.2.2.2 200 200 GET /b u 9.9.9.9 text/html\r
14.0 abc 3.3.3.3 200 200 GET /c u 9.9.9.9 text/html
";
        let result = parser.parse_file(content);

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].client_ip, "1.1.1.1");
        assert_eq!(result.records[1].client_ip, "2.2.2.2");
        assert_eq!(result.blank_lines, 1);
        assert_eq!(result.malformed.len(), 2);
        assert_eq!(result.malformed[0].line_number, 3);
        assert_eq!(result.malformed[1].line_number, 5);
    }

    #[test]
    fn test_parse_file_empty_content() {
        let parser = WhitespaceParser::new();
        let result = parser.parse_file("");
        assert!(result.records.is_empty());
        assert!(result.malformed.is_empty());
        assert_eq!(result.blank_lines, 0);
    }

    // Any line rendered from ten tokens with numeric slots 0, 1, and 4
    // parses back into the same positional fields.
    #[quickcheck]
    fn prop_well_formed_lines_round_trip(
        timestamp: u32,
        header_size: u32,
        response_size: u32,
        extra: bool,
    ) -> bool {
        let parser = WhitespaceParser::new();
        let mut line = format!(
            "{}.5 {} 10.0.0.1 200 {} GET /path user 10.0.0.2 text/plain",
            timestamp, header_size, response_size
        );
        if extra {
            line.push_str(" ignored trailing");
        }

        match parser.parse_line(&line) {
            Ok(record) => {
                record.timestamp == timestamp as f64 + 0.5
                    && record.header_size == header_size as u64
                    && record.response_size == response_size as u64
                    && record.response_type == "text/plain"
            }
            Err(_) => false,
        }
    }

    #[quickcheck]
    fn prop_short_lines_never_parse(token_count: usize) -> bool {
        let parser = WhitespaceParser::new();
        let count = token_count % REQUIRED_TOKENS;
        let line = vec!["tok"; count].join(" ");
        matches!(
            parser.parse_line(&line),
            Err(AnalyzeError::InsufficientTokens { .. })
        )
    }
}
