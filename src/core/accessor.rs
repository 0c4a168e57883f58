//! Pluggable value-accessor strategy.
//!
//! A record handed to the classifier is an arbitrary [`serde_json::Value`];
//! the accessor decides how to pull a number out of it. Four shapes cover
//! every caller: a key path (`"y"`, `"metrics.q1"`, `"y[2].also.nested"`),
//! a plain element index for array-style records, a caller transform over
//! the whole record, or identity for records that already are numbers.

use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::core::error::ConfigError;

/// Caller-supplied transform applied to the whole record.
pub type Transform = Arc<dyn Fn(&Value) -> Option<f64> + Send + Sync>;

#[derive(Clone)]
pub enum Accessor {
    /// Use the record itself as the value.
    Identity,
    /// Element `i` of an array-style record.
    Index(usize),
    /// Key path into an object-style record (numeric segments index arrays).
    Path(Vec<String>),
    /// Arbitrary transform; `None` signals a resolution failure.
    Func(Transform),
}

impl Accessor {
    /// Parse a dotted / bracketed key path. `"y[2].also"` and `"y.2.also"`
    /// are equivalent.
    #[must_use]
    pub fn path(spec: &str) -> Self {
        Self::Path(
            spec.split(['.', '[', ']'])
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Wrap a closure as an accessor.
    pub fn func(f: impl Fn(&Value) -> Option<f64> + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    /// CLI-friendly constructor: a bare integer means an array index,
    /// anything else is treated as a key path.
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        spec.trim()
            .parse::<usize>()
            .map_or_else(|_| Self::path(spec), Self::Index)
    }

    /// Extract a finite number from `record`. `record_no` is only used to
    /// point error messages at the offending input position.
    pub fn resolve(&self, record: &Value, record_no: usize) -> Result<f64, ConfigError> {
        let target = match self {
            Self::Identity => Some(record),
            Self::Index(i) => record.get(*i),
            Self::Path(segments) => walk(record, segments),
            Self::Func(f) => {
                return f(record).filter(|v| v.is_finite()).ok_or_else(|| {
                    ConfigError::Unresolved {
                        accessor: self.to_string(),
                        record: record_no,
                    }
                });
            }
        };
        let target = target.ok_or_else(|| ConfigError::Unresolved {
            accessor: self.to_string(),
            record: record_no,
        })?;
        as_finite_number(target).ok_or_else(|| ConfigError::NotNumeric {
            accessor: self.to_string(),
            record: record_no,
            found: kind_name(target),
        })
    }
}

impl Default for Accessor {
    fn default() -> Self {
        Self::Identity
    }
}

/// `"y"` → key path, matching the original accessor-prop ergonomics.
impl From<&str> for Accessor {
    fn from(spec: &str) -> Self {
        Self::path(spec)
    }
}
impl From<usize> for Accessor {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("<identity>"),
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Path(segments) => f.write_str(&segments.join(".")),
            Self::Func(_) => f.write_str("<fn>"),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor({self})")
    }
}

// --- Helpers ---

fn walk<'a>(record: &'a Value, segments: &[String]) -> Option<&'a Value> {
    if segments.is_empty() {
        return None;
    }
    let mut cursor = record;
    for seg in segments {
        cursor = match cursor {
            Value::Object(map) => map.get(seg)?,
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(cursor)
}

fn as_finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|x| x.is_finite())
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a non-finite number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
