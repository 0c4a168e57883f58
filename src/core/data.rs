//! Record ingest for the demo harness: fast numeric CSV plus JSON arrays.
//!
//! CSV rows become JSON objects keyed by the header row when one is present,
//! otherwise plain arrays (so `--y <column index>` works). Float parsing is
//! zero-allocation via lexical-core.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use serde_json::{Map, Value};

use crate::core::error::ChartError;

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    ColumnCountMismatch { want: usize, got: usize },
    BadFloat { column: usize, text: String },
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::ColumnCountMismatch { want, got } => {
                write!(f, "line {}: expected {} columns, got {}", self.line, want, got)
            }
            ParseErrorKind::BadFloat { column, text } => {
                write!(f, "line {}: column {} has invalid value '{}'", self.line, column, text)
            }
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 (the typographic minus some exports emit) to ASCII `-`.
#[inline]
fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                column,
                text: "NaN".into(),
            },
        })
    }
}

fn split_columns(buf: &[u8]) -> Vec<&[u8]> {
    buf.split(|&b| b == b',').map(trim).collect()
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read numeric CSV into heterogeneous records. Empty input is fine and
/// yields an empty vector; the classifier treats that as a no-op.
pub fn read_csv_records<R: Read>(src: R) -> Result<Vec<Value>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut records = Vec::<Value>::new();
    let mut header: Option<Vec<String>> = None;
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        let cols = split_columns(&buf);

        // header detection: non-numeric first field on the first data line
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[0]).is_err() {
                header = Some(
                    cols.iter()
                        .map(|c| String::from_utf8_lossy(c).into_owned())
                        .collect(),
                );
                continue;
            }
        }

        if let Some(names) = &header {
            if cols.len() != names.len() {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::ColumnCountMismatch {
                        want: names.len(),
                        got: cols.len(),
                    },
                });
            }
            let mut obj = Map::with_capacity(names.len());
            for (i, (name, col)) in names.iter().zip(&cols).enumerate() {
                obj.insert(name.clone(), number(parse_f64(col, line_no, i)?));
            }
            records.push(Value::Object(obj));
        } else {
            let mut row = Vec::with_capacity(cols.len());
            for (i, col) in cols.iter().enumerate() {
                row.push(number(parse_f64(col, line_no, i)?));
            }
            records.push(Value::Array(row));
        }
    }
    Ok(records)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<Value>, ParseCsvError> {
    if path == "-" {
        read_csv_records(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_records(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

// --- JSON ingest ---

/// Read a JSON document holding an array of records.
pub fn read_json_records<R: Read>(src: R) -> Result<Vec<Value>, ChartError> {
    match serde_json::from_reader::<_, Value>(src)? {
        Value::Array(records) => Ok(records),
        _ => Err(ChartError::JsonShape("an array of records")),
    }
}

pub fn read_json_from_path(path: &str) -> Result<Vec<Value>, ChartError> {
    if path == "-" {
        read_json_records(std::io::stdin())
    } else {
        read_json_records(std::fs::File::open(path)?)
    }
}

#[inline]
fn number(v: f64) -> Value {
    // parse_f64 already rejected non-finite values
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn headerless_csv_becomes_array_records() {
        let src = "1.5,2\n-3,4\n".as_bytes();
        let records = read_csv_records(src).unwrap();
        assert_eq!(records, vec![json!([1.5, 2.0]), json!([-3.0, 4.0])]);
    }

    #[test]
    fn header_row_keys_object_records() {
        let src = "y,y0\n5,0\n-8,1\n".as_bytes();
        let records = read_csv_records(src).unwrap();
        assert_eq!(
            records,
            vec![json!({"y": 5.0, "y0": 0.0}), json!({"y": -8.0, "y0": 1.0})]
        );
    }

    #[test]
    fn unicode_minus_and_comments_are_handled() {
        let src = "# comment\n\u{2212}7\n".as_bytes();
        let records = read_csv_records(src).unwrap();
        assert_eq!(records, vec![json!([-7.0])]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let src = "y,y0\n1,2\n3\n".as_bytes();
        let err = read_csv_records(src).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::ColumnCountMismatch { want: 2, got: 1 }
        ));
        assert_eq!(err.line, 3);
    }

    #[test]
    fn bad_float_names_line_and_column() {
        let src = "1,2\n3,oops\n".as_bytes();
        let err = read_csv_records(src).unwrap_err();
        match err.kind {
            ParseErrorKind::BadFloat { column, text } => {
                assert_eq!(column, 1);
                assert_eq!(text, "oops");
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(read_csv_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn json_array_roundtrips() {
        let src = r#"[{"y": 1}, {"y": -2}]"#.as_bytes();
        let records = read_json_records(src).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn json_non_array_is_rejected() {
        let err = read_json_records(r#"{"y": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::JsonShape(_)));
    }
}
