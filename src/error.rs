use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal for a generation run; nothing is written once one occurs.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: could not parse value {digits:?} of {name}: {source}")]
    ValueParse {
        line: usize,
        name: String,
        digits: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {name} already defined on line {first_line}")]
    DuplicateName {
        line: usize,
        first_line: usize,
        name: String,
    },

    #[error("formatting output: {source}")]
    Render {
        #[source]
        source: syn::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
