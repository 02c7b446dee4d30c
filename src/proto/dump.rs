//! Helpers used by generated `dump_to` implementations.

use std::fmt::{self, Display, Write};

/// Append `  name: value\n`.
pub fn dump_field(out: &mut String, name: &str, value: impl Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "  {}: {}", name, value);
}

/// Append `  name: ` followed by a nested message dump.
pub fn dump_message<M: super::ProtoMessage + ?Sized>(out: &mut String, name: &str, value: &M) {
    out.push_str("  ");
    out.push_str(name);
    out.push_str(": ");
    value.dump_to(out);
    out.push('\n');
}

/// Renders a bool as `YES`/`NO`.
#[derive(Debug, Clone, Copy)]
pub struct YesNo(pub bool);

impl Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "YES" } else { "NO" })
    }
}

/// Renders a string in single quotes.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

/// Renders bytes as upper-case hex pairs.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
