//! Parameter kinds.
//!
//! A [`ParamKind`] describes how one argument slot of a command validates
//! and converts the input tokens at a given position. Every operation here
//! is a pure function of `(tokens, position)`: probing a kind never mutates
//! the tokens or any shared cursor, so the matcher can test many candidate
//! commands against the same input independently.

use std::fmt;
use std::hash::{Hash, Hasher};

use keyline_foundation::{Error, Result, Value, ValueType};

/// How a single argument slot parses its token (or run of tokens).
#[derive(Clone, Debug)]
pub enum ParamKind {
    /// A run of decimal digits, converted to an `i64`.
    Integer {
        /// Parameter name
        name: String,
    },
    /// Digits with an optional fractional part, converted to an `f64`.
    Float {
        /// Parameter name
        name: String,
    },
    /// Any token, taken verbatim.
    String {
        /// Parameter name
        name: String,
    },
    /// A literal word that must appear exactly.
    Switch {
        /// The literal to match
        keyword: String,
    },
    /// Zero or more elements terminated by a sentinel word.
    Array {
        /// Token that closes the run
        end_word: String,
        /// Kind each element must satisfy
        element: Box<ParamKind>,
    },
}

impl ParamKind {
    /// Creates an integer parameter.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::Integer { name: name.into() }
    }

    /// Creates a float parameter.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::Float { name: name.into() }
    }

    /// Creates a string parameter.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::String { name: name.into() }
    }

    /// Creates a switch parameter matching `keyword` literally.
    #[must_use]
    pub fn switch(keyword: impl Into<String>) -> Self {
        Self::Switch {
            keyword: keyword.into(),
        }
    }

    /// Creates an array parameter of `element` values closed by `end_word`.
    #[must_use]
    pub fn array(end_word: impl Into<String>, element: ParamKind) -> Self {
        Self::Array {
            end_word: end_word.into(),
            element: Box::new(element),
        }
    }

    /// The declared name, switch keyword, or array end word.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Integer { name } | Self::Float { name } | Self::String { name } => name,
            Self::Switch { keyword } => keyword,
            Self::Array { end_word, .. } => end_word,
        }
    }

    /// Tie-break priority between whole candidates; higher wins.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::String { .. } => 0,
            Self::Float { .. } => 1,
            Self::Integer { .. } => 2,
            Self::Switch { .. } => 3,
            Self::Array { .. } => 4,
        }
    }

    /// The declared type shape, e.g. `int` or `array<float>`.
    ///
    /// Two kinds are equal exactly when their descriptions are equal.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer { .. } => "int".to_string(),
            Self::Float { .. } => "float".to_string(),
            Self::String { .. } => "str".to_string(),
            Self::Switch { keyword } => format!("switch<{keyword}>"),
            Self::Array { element, .. } => format!("array<{}>", element.describe()),
        }
    }

    /// The type of value this kind converts into.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Integer { .. } => ValueType::Int,
            Self::Float { .. } => ValueType::Float,
            Self::String { .. } | Self::Switch { .. } => ValueType::String,
            Self::Array { element, .. } => ValueType::list(element.value_type()),
        }
    }

    /// Returns true if the token (or token run) at `position` satisfies this kind.
    ///
    /// Positions past the end of `tokens` are never accepted.
    #[must_use]
    pub fn accepts<S: AsRef<str>>(&self, tokens: &[S], position: usize) -> bool {
        self.span(tokens, position).is_some()
    }

    /// Converts the tokens at `position`, returning the value and the
    /// position just past everything consumed.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if [`accepts`](Self::accepts) would have
    /// returned false for the same `(tokens, position)`, including an array
    /// whose end word never appears.
    pub fn consume<S: AsRef<str>>(&self, tokens: &[S], position: usize) -> Result<(Value, usize)> {
        let violation = || Error::contract_violation(self.to_string(), position);

        match self {
            Self::Array { end_word, element } => {
                let mut items = im::Vector::new();
                let mut cursor = position;
                loop {
                    let token = tokens.get(cursor).ok_or_else(violation)?.as_ref();
                    if token == end_word {
                        return Ok((Value::List(items), cursor + 1));
                    }
                    if !element.accepts(tokens, cursor) {
                        return Err(violation());
                    }
                    let (value, next) = element.consume(tokens, cursor)?;
                    items.push_back(value);
                    cursor = next;
                }
            }
            _ => {
                let token = tokens.get(position).ok_or_else(violation)?.as_ref();
                let value = self.convert(token).ok_or_else(violation)?;
                Ok((value, position + 1))
            }
        }
    }

    /// Returns the position just past the tokens this kind would consume.
    fn span<S: AsRef<str>>(&self, tokens: &[S], position: usize) -> Option<usize> {
        match self {
            Self::Array { end_word, element } => {
                let mut cursor = position;
                loop {
                    let token = tokens.get(cursor)?.as_ref();
                    if token == end_word {
                        return Some(cursor + 1);
                    }
                    cursor = element.span(tokens, cursor)?;
                }
            }
            _ => {
                let token = tokens.get(position)?.as_ref();
                self.matches_token(token).then_some(position + 1)
            }
        }
    }

    /// Single-token acceptance test for the scalar kinds.
    fn matches_token(&self, token: &str) -> bool {
        match self {
            Self::Integer { .. } => is_digits(token) && token.parse::<i64>().is_ok(),
            Self::Float { .. } => is_decimal(token),
            Self::String { .. } => true,
            Self::Switch { keyword } => token == keyword,
            Self::Array { .. } => false,
        }
    }

    /// Single-token conversion for the scalar kinds.
    fn convert(&self, token: &str) -> Option<Value> {
        if !self.matches_token(token) {
            return None;
        }
        match self {
            Self::Integer { .. } => token.parse::<i64>().ok().map(Value::Int),
            Self::Float { .. } => token.parse::<f64>().ok().map(Value::Float),
            Self::String { .. } | Self::Switch { .. } => Some(Value::from(token)),
            Self::Array { .. } => None,
        }
    }
}

/// `\d+`
fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// `\d+(\.\d+)?`
fn is_decimal(token: &str) -> bool {
    match token.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(token),
    }
}

impl PartialEq for ParamKind {
    fn eq(&self, other: &Self) -> bool {
        self.describe() == other.describe()
    }
}

impl Eq for ParamKind {}

impl Hash for ParamKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.describe().hash(state);
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch { keyword } => write!(f, "{keyword}"),
            Self::Array { end_word, element } => write!(f, "{element}... {end_word}"),
            _ => write!(f, "<{}: {}>", self.name(), self.describe()),
        }
    }
}
