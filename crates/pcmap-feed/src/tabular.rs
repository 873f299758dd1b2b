//! Quote-tolerant parser for the comma-separated store feed.
//!
//! The feed is hand-maintained spreadsheet output, not strict RFC 4180:
//! double quotes escape embedded commas, adjacent delimiters produce empty
//! fields, and rows may be shorter or longer than the header. Everything here
//! degrades instead of erroring; type coercion happens in [`crate::decode`].

/// Parsed tabular text: one header row plus zero or more data rows.
///
/// Rows are stored positionally; [`Table::field`] resolves a header name to
/// its column for callers that think in names.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Column names, trimmed, in feed order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Field value of row `row` under `header`.
    ///
    /// `None` when the header does not exist or the row is too short to reach
    /// its column — callers substitute their per-field default either way.
    #[must_use]
    pub fn field(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Parses raw feed text into a [`Table`].
///
/// Lines are split on any line-ending style and dropped when blank after
/// trimming. Returns `None` when fewer than two lines survive — a feed
/// without a header and at least one data row carries no data.
#[must_use]
pub fn parse_table(text: &str) -> Option<Table> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let headers: Vec<String> = lines.next()?.split(',').map(|h| h.trim().to_string()).collect();

    let rows: Vec<Vec<String>> = lines
        .map(|line| {
            let mut fields = split_fields(line);
            // Extra fields beyond the header count are silently dropped.
            fields.truncate(headers.len());
            fields
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(Table { headers, rows })
}

/// Tokenizes one data line into fields.
///
/// A field is either a double-quoted run (commas inside are literal, quotes
/// stripped), an unquoted run up to the next comma, or the empty string
/// between adjacent delimiters. Every field is trimmed after extraction.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        let (token, remainder) = next_field(rest);
        fields.push(clean_field(token));
        match remainder {
            Some(r) => rest = r,
            None => break,
        }
    }
    fields
}

/// Splits off the first field of `line`: the raw token plus the text after
/// the delimiting comma, or `None` when the line is exhausted.
fn next_field(line: &str) -> (&str, Option<&str>) {
    let body = line.trim_start();
    if let Some(after_open) = body.strip_prefix('"') {
        if let Some(close) = after_open.find('"') {
            let token = &body[..close + 2];
            let tail = &after_open[close + 1..];
            // Stray text between the closing quote and the delimiter is dropped.
            return match tail.find(',') {
                Some(comma) => (token, Some(&tail[comma + 1..])),
                None => (token, None),
            };
        }
        // Unterminated quote: treat the rest as an unquoted field.
    }
    match line.find(',') {
        Some(comma) => (&line[..comma], Some(&line[comma + 1..])),
        None => (line, None),
    }
}

/// Trims a raw token and strips a leading and trailing double quote.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}
