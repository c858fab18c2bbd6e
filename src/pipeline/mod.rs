// cursorfont.h -> Rust module generation pipeline

pub mod emitter;
pub mod fs_ops;
pub mod macro_matcher;
pub mod renderer;
pub mod source_reader;
pub mod value_parser;

use std::collections::HashMap;
use std::path::Path;

use crate::config::{Config, MappingTarget};
use crate::error::{GenError, Result};
use crate::model::Entry;

/// Extracts entries from the header in the order they appear.
///
/// Non-matching lines are skipped. A value outside the `u32` range or a
/// second definition of the same name aborts the whole run.
pub fn collect_entries(content: &[u8]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for line in source_reader::lines(content) {
        let Some(m) = macro_matcher::match_line(&line.text) else {
            continue;
        };

        let value = value_parser::parse_value(m.digits).map_err(|source| GenError::ValueParse {
            line: line.number,
            name: m.name.to_string(),
            digits: m.digits.to_string(),
            source,
        })?;

        if let Some(&first_line) = seen.get(m.name) {
            return Err(GenError::DuplicateName {
                line: line.number,
                first_line,
                name: m.name.to_string(),
            });
        }
        seen.insert(m.name.to_string(), line.number);

        let mut entry = Entry::new(m.name, value).at_line(line.number);
        if let Some(comment) = m.comment {
            entry = entry.with_comment(comment);
        }
        tracing::debug!("line {}: {}", line.number, entry.info());
        entries.push(entry);
    }

    Ok(entries)
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub entries: Vec<Entry>,
    pub source: String,
}

/// Turns header bytes into the final module text without touching the filesystem.
/// `source_path` only appears in the generated header comment.
pub fn generate_source(
    content: &[u8],
    target: &MappingTarget,
    source_path: &Path,
) -> Result<Generated> {
    let entries = collect_entries(content)?;
    let fragments = renderer::render(&entries);
    let buf = emitter::assemble(&fragments, target, source_path);
    let source = emitter::normalize(&buf)?;

    Ok(Generated { entries, source })
}

/// Reads `config.input_path`, generates the module and overwrites
/// `config.output_path`. Returns the number of constants written.
pub fn run(config: &Config) -> Result<usize> {
    let content = source_reader::read_source(&config.input_path)?;
    let generated = generate_source(&content, &config.target, &config.input_path)?;
    tracing::info!(
        "matched {} cursor definitions in {}",
        generated.entries.len(),
        config.input_path.display()
    );

    emitter::write_output(&config.output_path, &generated.source)?;
    Ok(generated.entries.len())
}
