//! Append-only text sink for matcher descriptions

use crate::matchers::Matcher;
use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append a value in its diagnostic rendering.
    ///
    /// Strings and characters are quoted and escaped, arrays are listed
    /// element by element and everything else is wrapped in angle brackets.
    pub fn append_value(&mut self, value: &Value) -> &mut Self {
        match value {
            Value::Null => self.append_text("null"),
            Value::Scalar(scalar) if scalar.is_textual() => {
                self.text.push('"');
                escape_into(&mut self.text, &scalar.to_string());
                self.text.push('"');
                self
            }
            Value::Array(sequence) => self.append_value_list("[", ", ", "]", sequence.items()),
            other => {
                self.text.push('<');
                self.text.push_str(&other.to_string());
                self.text.push('>');
                self
            }
        }
    }

    pub fn append_description_of(&mut self, matcher: &dyn Matcher) -> &mut Self {
        matcher.describe_to(self);
        self
    }

    pub fn append_list<'a, I, M>(&mut self, start: &str, separator: &str, end: &str, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a M>,
        M: Matcher + 'a,
    {
        self.append_text(start);
        for (i, matcher) in matchers.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            self.append_description_of(matcher);
        }
        self.append_text(end)
    }

    pub fn append_value_list(&mut self, start: &str, separator: &str, end: &str, values: &[Value]) -> &mut Self {
        self.append_text(start);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            self.append_value(value);
        }
        self.append_text(end)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
}
