//! Reading and writing of replay scripts and box annotations.

use std::{
    fs::{self, File},
    io::{self, BufReader, Read, Write},
    path::Path,
};

/// Creates the parent directories of the given file path if they are
/// missing.
pub fn create_parent_directories(file_path: impl AsRef<Path>) -> io::Result<()> {
    match file_path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Reads and returns the content of the specified text file.
pub fn read_text_file(file_path: impl AsRef<Path>) -> io::Result<String> {
    let file = File::open(file_path)?;
    let mut text = String::new();
    let _ = BufReader::new(file).read_to_string(&mut text)?;
    Ok(text)
}

/// Writes the given string as a text file with the specified path, creating
/// missing directories and replacing any existing file.
pub fn write_text_file(text: &str, output_file_path: impl AsRef<Path>) -> io::Result<()> {
    create_parent_directories(&output_file_path)?;
    let mut file = File::create(output_file_path)?;
    write!(&mut file, "{text}")
}

/// Deserializes an object of type `T` from the given RON (Rusty Object
/// Notation) text.
#[cfg(feature = "ron")]
pub fn parse_ron_str<T>(text: &str) -> anyhow::Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    ron::from_str::<T>(text).map_err(anyhow::Error::from)
}

/// Reads the RON file at the given path and deserializes the contents into
/// an object of type `T`.
#[cfg(feature = "ron")]
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    use anyhow::Context;

    let file_path = file_path.as_ref();

    let text = read_text_file(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    parse_ron_str(&text).with_context(|| format!("Invalid syntax in {}", file_path.display()))
}

/// Serializes the given value to pretty-printed RON text.
#[cfg(feature = "ron")]
pub fn to_ron_string<T>(value: &T) -> anyhow::Result<String>
where
    T: serde::ser::Serialize,
{
    ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default()).map_err(Into::into)
}

/// Serializes the given value to RON and writes it to the given path.
#[cfg(feature = "ron")]
pub fn write_ron_file<T>(value: &T, output_file_path: impl AsRef<Path>) -> anyhow::Result<()>
where
    T: serde::ser::Serialize,
{
    let text = to_ron_string(value)?;
    write_text_file(&text, output_file_path).map_err(Into::into)
}
