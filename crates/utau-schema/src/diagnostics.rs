// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

/// A single schema mismatch at one location in a validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Dotted/indexed path to the offending value, e.g. `data.lyrics[0].type`.
    /// Empty for the top-level value itself.
    pub path: String,
    /// The shape the schema accepts at this path.
    pub expected: &'static str,
    /// What was actually found there.
    pub found: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "expected {}, found {}", self.expected, self.found)
        } else {
            write!(
                f,
                "{}: expected {}, found {}",
                self.path, self.expected, self.found
            )
        }
    }
}

/// Every mismatch collected while validating one value.
///
/// Validation walks the whole value and keeps going past the first problem,
/// so a single failed validation reports all independent mismatches at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationDiagnostics {
    mismatches: Vec<Mismatch>,
}

impl ValidationDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub(crate) fn push(
        &mut self,
        path: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) {
        self.mismatches.push(Mismatch {
            path: path.into(),
            expected,
            found: found.into(),
        });
    }
}

impl fmt::Display for ValidationDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mismatch) in self.mismatches.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}
