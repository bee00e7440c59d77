//! Rust source emission for encoded tables.
//!
//! Renders an encoded table as a `pub const` byte array that another crate
//! can `include!` or commit as a generated file. Once compiled, the bytes sit
//! in a read-only data section and can be read in the layout of
//! [`crate::table::encode`].

use std::fmt::{Display, Formatter, Result};

use crate::table::core::{PrecomputedTable, TableError};
use crate::table::encode::encode;

const BYTES_PER_LINE: usize = 16;

/// Strict and reserved keywords of the 2024 edition.
const KEYWORDS: [&str; 52] = [
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// File format produced by [`render`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rust source, rendered by [`RustConst`].
    Rust,
    /// The raw encoded layout.
    Binary,
}

/// A named byte array, rendered as Rust source by its `Display` impl.
///
/// ```text
/// // Generated by gen-p256-table. DO NOT EDIT.
///
/// #[rustfmt::skip]
/// pub const NAME: [u8; LEN] = [
///     0x3c, 0x14, ...
/// ];
/// ```
pub struct RustConst<'a> {
    name: &'a str,
    bytes: &'a [u8],
}

impl<'a> RustConst<'a> {
    /// Returns `None` if `name` is not a plain Rust identifier, or is a keyword.
    pub fn new(name: &'a str, bytes: &'a [u8]) -> Option<Self> {
        if !is_identifier(name) {
            return None;
        }

        Some(Self { name, bytes })
    }
}

impl Display for RustConst<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "// Generated by gen-p256-table. DO NOT EDIT.")?;
        writeln!(f)?;
        writeln!(f, "#[rustfmt::skip]")?;
        writeln!(f, "pub const {}: [u8; {}] = [", self.name, self.bytes.len())?;

        for line in self.bytes.chunks(BYTES_PER_LINE) {
            f.write_str("   ")?;

            for byte in line {
                write!(f, " 0x{:02x},", byte)?;
            }

            writeln!(f)?;
        }

        writeln!(f, "];")
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if name.len() > 1 => {}
        _ => return false,
    }

    if KEYWORDS.iter().any(|&k| k == name) {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Encodes `table` and renders it in `format`.
///
/// `name` is only used by [`OutputFormat::Rust`].
///
/// # Errors
///
/// Returns [`TableError::InvalidName`] if the Rust format is requested and
/// `name` is rejected by [`RustConst::new`].
pub fn render(
    table: &PrecomputedTable,
    format: OutputFormat,
    name: &str,
) -> std::result::Result<Vec<u8>, TableError> {
    let bytes = encode(table);

    match format {
        OutputFormat::Rust => {
            let source = RustConst::new(name, &bytes).ok_or(TableError::InvalidName)?;
            Ok(source.to_string().into_bytes())
        }
        OutputFormat::Binary => Ok(bytes),
    }
}
