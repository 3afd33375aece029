use serde::{Deserialize, Serialize};

/// One submitted form field: a raw name and an optional value.
///
/// Fields arrive from an external form-serialization collaborator and are
/// treated as immutable input. A missing value serializes as the empty
/// string, mirroring how browsers report valueless controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A field submitted without a value.
    pub fn unvalued(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub(crate) fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl From<(&str, &str)> for Field {
    fn from((name, value): (&str, &str)) -> Self {
        Field::new(name, value)
    }
}

impl From<(String, String)> for Field {
    fn from((name, value): (String, String)) -> Self {
        Field::new(name, value)
    }
}

impl From<(&str, Option<&str>)> for Field {
    fn from((name, value): (&str, Option<&str>)) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }
}
