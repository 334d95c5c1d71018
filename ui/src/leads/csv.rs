//! CSV text for the local lead blobs.
//!
//! Header rows are written bare; every data field is double-quoted with inner
//! quotes doubled. [`parse`] reads both forms back.

use crate::core::error::{Result, SiteError};

pub fn escape_field(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

pub fn header_line(headers: &[&str]) -> String {
    let mut line = headers.join(",");
    line.push('\n');
    line
}

pub fn row_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Split CSV text into rows of fields. Quoted fields may contain commas,
/// doubled quotes and line breaks; a trailing newline does not add a row.
pub fn parse(input: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut in_quotes = false;
    let mut field_started = false;
    let mut closed_quote = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    closed_quote = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
            }
            '"' => {
                return Err(SiteError::Csv {
                    line,
                    reason: "unexpected quote",
                })
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                field_started = false;
                closed_quote = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                field_started = false;
                closed_quote = false;
                line += 1;
            }
            _ if closed_quote => {
                return Err(SiteError::Csv {
                    line,
                    reason: "text after closing quote",
                })
            }
            _ => {
                field.push(c);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(SiteError::Csv {
            line,
            reason: "unterminated quoted field",
        });
    }
    if field_started || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}
