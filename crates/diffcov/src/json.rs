//! JSON rendering compatible with Python's `json` module.
//!
//! diff-cover and reviewdog pipelines were built around Python's defaults:
//! `", "` / `": "` separators for single-line output, `indent=2` for files,
//! and `ensure_ascii` escaping. serde_json's stock formatters differ on all
//! three, so both styles go through [`PyJsonFormatter`].

use crate::result::DiffcovResult;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Layout of rendered JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, like `json.dumps(value)`
    #[default]
    Line,
    /// Two-space indentation, like `json.dump(value, f, indent=2)`
    Pretty,
}

/// serde_json formatter producing Python-style JSON text
#[derive(Debug, Clone)]
pub struct PyJsonFormatter {
    indent: Option<&'static [u8]>,
    current_indent: usize,
    has_value: bool,
}

impl PyJsonFormatter {
    /// Formatter for the given layout
    #[must_use]
    pub const fn new(style: JsonStyle) -> Self {
        let indent: Option<&'static [u8]> = match style {
            JsonStyle::Line => None,
            JsonStyle::Pretty => Some(b"  "),
        };
        Self {
            indent,
            current_indent: 0,
            has_value: false,
        }
    }

    fn begin_value<W>(&self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self.indent {
            Some(indent) => {
                writer.write_all(if first { b"\n" } else { b",\n" })?;
                write_indent(writer, self.current_indent, indent)
            }
            None if first => Ok(()),
            None => writer.write_all(b", "),
        }
    }

    fn close<W>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent = self.current_indent.saturating_sub(1);
        if let Some(indent) = self.indent {
            if self.has_value {
                writer.write_all(b"\n")?;
                write_indent(writer, self.current_indent, indent)?;
            }
        }
        writer.write_all(bracket)
    }

    fn open<W>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(bracket)
    }
}

fn write_indent<W>(writer: &mut W, depth: usize, indent: &[u8]) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    for _ in 0..depth {
        writer.write_all(indent)?;
    }
    Ok(())
}

impl Formatter for PyJsonFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.open(writer, b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.close(writer, b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_value(writer, first)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.open(writer, b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.close(writer, b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_value(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    // ensure_ascii: everything outside ' '..='~' that serde_json has not
    // already escaped becomes \uXXXX, astral chars as surrogate pairs.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| (b' '..=b'~').contains(&b)) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut utf16 = [0u16; 2];
        let mut utf8 = [0u8; 4];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(ch.encode_utf8(&mut utf8).as_bytes())?;
            } else {
                for unit in ch.encode_utf16(&mut utf16) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` into `writer` in the given style
pub fn to_writer<W, T>(writer: W, value: &T, style: JsonStyle) -> DiffcovResult<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut ser = Serializer::with_formatter(writer, PyJsonFormatter::new(style));
    value.serialize(&mut ser)?;
    Ok(())
}

/// Serialize `value` to a string in the given style
pub fn to_string<T>(value: &T, style: JsonStyle) -> DiffcovResult<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    to_writer(&mut buf, value, style)?;
    // ensure_ascii output is pure ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
