//! JSON export
//!
//! Pretty-printed with four-space indentation. serde_json never escapes
//! non-ASCII characters, so they are written literally.

use crate::output::traits::OutputResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serializes `value` to a pretty JSON string
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> OutputResult<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `value` as pretty JSON, replacing any existing file
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    writer.flush()?;

    tracing::debug!("Wrote JSON to {}", path.display());
    Ok(())
}

/// Reads a value previously written with [`write_json`]
pub fn read_json<T: DeserializeOwned>(path: &Path) -> OutputResult<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
