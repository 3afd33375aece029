use std::collections::HashMap;

pub const DEFAULT_SEPARATOR: char = '.';

/// Options controlling how field names are segmented and inserted.
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Separator for plain (non-bracket) name segments.
    pub separator: char,
    /// Optional segment renames, applied during insertion.
    pub dict: Option<HashMap<String, String>>,
    /// Error on shape conflicts instead of degrading best-effort.
    pub strict: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_dict(mut self, dict: HashMap<String, String>) -> Self {
        self.dict = Some(dict);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub(crate) fn substitute<'a>(&'a self, segment: &'a str) -> &'a str {
        if segment.is_empty() {
            return segment;
        }
        match &self.dict {
            Some(dict) => dict.get(segment).map(String::as_str).unwrap_or(segment),
            None => segment,
        }
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            dict: None,
            strict: false,
        }
    }
}
