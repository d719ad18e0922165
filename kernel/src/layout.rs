//! `Layout`: an immutable configuration of the integer sequence.
//!
//! # Equality semantics
//!
//! Equality and hashing cover the value sequence only. The step cost that
//! produced a layout is provenance, not identity: two routes reaching the
//! same values via different swaps compare equal and share a fingerprint.

use std::fmt;

use crate::cost::swap_cost;
use crate::error::ParseError;
use crate::fingerprint::{fingerprint, Fingerprint, DOMAIN_LAYOUT_IDENTITY};

/// An immutable value sequence plus the cost of the swap that produced it.
#[derive(Debug, Clone)]
pub struct Layout {
    values: Vec<i64>,
    /// Parity cost of the producing swap; 0 for parsed or constructed roots.
    step_cost: u64,
}

impl Layout {
    /// Parse a whitespace-separated signed integer sequence.
    ///
    /// Any run of ASCII whitespace separates tokens; an empty or
    /// whitespace-only input yields the zero-length layout.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for the first token that is not a signed
    /// integer.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut values = Vec::new();
        for (position, token) in text.split_whitespace().enumerate() {
            let value = token.parse::<i64>().map_err(|_| ParseError {
                token: token.to_string(),
                position,
            })?;
            values.push(value);
        }
        Ok(Self {
            values,
            step_cost: 0,
        })
    }

    /// Construct a root layout (step cost 0) from raw values.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            values,
            step_cost: 0,
        }
    }

    /// The value sequence.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the zero-length layout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parity cost of the swap that produced this layout (0 for roots).
    #[must_use]
    pub fn step_cost(&self) -> u64 {
        self.step_cost
    }

    /// Element-wise goal test against `goal`.
    #[must_use]
    pub fn is_goal(&self, goal: &Layout) -> bool {
        self.values == goal.values
    }

    /// Enumerate every single-swap successor.
    ///
    /// Pairs are emitted with the outer index ascending and the inner index
    /// descending: for each `i` in `0..n-1`, `j` runs from `n-1` down to
    /// `i+1`. Downstream FIFO tie-breaking makes this order part of the
    /// observable solver output; it must not change.
    ///
    /// Each child's step cost is the parity cost of the two values swapped
    /// out of this layout. Layouts shorter than two elements have no
    /// successors.
    #[must_use]
    pub fn children(&self) -> Vec<Layout> {
        let n = self.values.len();
        if n < 2 {
            return Vec::new();
        }
        let mut children = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n - 1 {
            for j in (i + 1..n).rev() {
                let mut values = self.values.clone();
                values.swap(i, j);
                children.push(Layout {
                    values,
                    step_cost: swap_cost(self.values[i], self.values[j]),
                });
            }
        }
        children
    }

    /// Little-endian byte serialization of the value sequence.
    ///
    /// This is the identity surface: layouts with equal values produce equal
    /// bytes regardless of step cost.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.values.len() * 8);
        for v in &self.values {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf
    }

    /// Identity fingerprint, the open/closed map key in the search layer.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(DOMAIN_LAYOUT_IDENTITY, &self.identity_bytes())
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Layout {}

impl std::hash::Hash for Layout {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl fmt::Display for Layout {
    /// Values joined by single ASCII spaces, no trailing whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.values {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
