//! JSON rendering for query output.
//!
//! Output uses `", "` and `": "` separators and escapes everything outside
//! printable ASCII as `\uXXXX`, so it is stable across terminals and
//! matches what existing consumers of the demo parse.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Formatter writing spaced separators and ASCII-only strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value with [`SpacedAsciiFormatter`].
pub fn to_json_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}
