//! Textual rendering of a vector's live elements.
//!
//! The format is `[`, the elements separated by `, `, then `]`. An empty
//! vector renders as `[]`. There is no padding inside the brackets.

use std::fmt;
use std::io;

use crate::vector::Vector;

impl<T: fmt::Display> Vector<T> {
    /// Write the bracketed, comma-separated rendering to `out`.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
