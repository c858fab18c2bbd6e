// Header loading and line splitting

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};

/// Reads the whole header into memory before any line is looked at.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let content = fs::read(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: Cow<'a, str>,
}

/// Splits `content` on `\n`, yielding trimmed lines numbered from 1.
pub fn lines(content: &[u8]) -> impl Iterator<Item = SourceLine<'_>> {
    content
        .split(|&b| b == b'\n')
        .enumerate()
        .map(|(ix, raw)| SourceLine {
            number: ix + 1,
            text: trim_cow(String::from_utf8_lossy(raw)),
        })
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}
