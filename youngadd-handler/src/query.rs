//! Query-string operand parsing.

use std::num::ParseIntError;

use thiserror::Error;

/// The two summands extracted from a request query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

/// Failure to extract two integers from a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The query string had fewer than two `&`-separated fields.
    #[error("expected two '&'-separated operands in {query:?}")]
    MissingOperand { query: String },
    /// A field was present but is not a base-10 integer.
    #[error("operand {index} ({text:?}) is not a base-10 integer")]
    InvalidOperand {
        index: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl Operands {
    /// Splits `query` on `&` and parses the first two fields as signed
    /// base-10 integers. Surrounding whitespace is tolerated and fields past
    /// the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the second field is missing or a field is
    /// not a valid integer.
    pub fn parse(query: &str) -> Result<Self, ParseError> {
        let mut fields = query.split('&');
        let first = fields.next().unwrap_or("");
        let Some(second) = fields.next() else {
            return Err(ParseError::MissingOperand {
                query: query.to_string(),
            });
        };
        Ok(Self {
            a: parse_operand(1, first)?,
            b: parse_operand(2, second)?,
        })
    }

    /// The sum, widened so that no pair of operands can overflow it.
    #[must_use]
    pub fn sum(self) -> i128 {
        i128::from(self.a) + i128::from(self.b)
    }
}

fn parse_operand(index: usize, field: &str) -> Result<i64, ParseError> {
    let text = field.trim();
    text.parse().map_err(|source| ParseError::InvalidOperand {
        index,
        text: text.to_string(),
        source,
    })
}
