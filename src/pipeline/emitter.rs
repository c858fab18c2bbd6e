// Assembles the generated module, normalizes it and writes it out

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::config::MappingTarget;
use crate::error::{GenError, Result};

use super::fs_ops::ensure_parent_dir;
use super::renderer::Fragments;

const INDENT: &str = "    ";

/// Wraps the rendered fragments in the module template. The result is not yet
/// indented; [`normalize`] takes care of that.
pub fn assemble(fragments: &Fragments, target: &MappingTarget, source: &Path) -> String {
    let mut buf = String::new();

    buf.push_str(&format!(
        "// Generated by cursorfont-gen from {}; DO NOT EDIT.\n",
        source.display()
    ));
    buf.push_str("#![allow(non_upper_case_globals)]\n\n");
    buf.push_str("use std::collections::HashMap;\n");
    buf.push_str("use std::sync::LazyLock;\n\n");
    if let Some(import) = target.import_path() {
        buf.push_str(&format!("use {};\n\n", import));
    }

    buf.push_str(&fragments.constants);
    buf.push('\n');

    buf.push_str(&format!(
        "pub static {}: LazyLock<HashMap<&'static str, {}>> = LazyLock::new(|| {{\n",
        target.map_name.trim(),
        target.type_name()
    ));
    buf.push_str("HashMap::from([\n");
    buf.push_str(&fragments.mapping);
    buf.push_str("])\n");
    buf.push_str("});\n");

    buf
}

/// Checks that `buf` is a valid Rust source file and returns it re-indented
/// with normalized whitespace. On a syntax error the raw buffer is logged.
pub fn normalize(buf: &str) -> Result<String> {
    if let Err(source) = syn::parse_file(buf) {
        tracing::error!("unformatted output:\n{}", buf);
        return Err(GenError::Render { source });
    }
    Ok(reindent(buf))
}

/// Replaces `path` with `content`. The bytes go to a temporary file next to
/// the target first, so the old file survives any failure.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = ensure_parent_dir(path).map_err(write_err)?;
    let mut tmp = tempfile::Builder::new()
        .prefix(".cursorfont-gen")
        .permissions(fs::Permissions::from_mode(0o644))
        .tempfile_in(&dir)
        .map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn reindent(buf: &str) -> String {
    let mut out = String::with_capacity(buf.len() + buf.len() / 4);
    // Bracket depth before each line that opened an indentation level.
    let mut levels: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut pending_blank = false;

    for line in buf.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }

        let leading = line
            .chars()
            .take_while(|c| matches!(c, ')' | ']' | '}'))
            .count();
        let start = depth.saturating_sub(leading);
        while levels.last().is_some_and(|&level| level >= start) {
            levels.pop();
        }

        for _ in 0..levels.len() {
            out.push_str(INDENT);
        }
        out.push_str(line);
        out.push('\n');

        depth = depth.saturating_add_signed(bracket_delta(line));
        if depth > start {
            levels.push(start);
        }
    }

    out
}

/// Net change in bracket depth over one line, ignoring string literals and comments.
fn bracket_delta(line: &str) -> isize {
    let mut delta = 0isize;
    let mut chars = line.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            '(' | '[' | '{' => delta += 1,
            ')' | ']' | '}' => delta -= 1,
            _ => {}
        }
    }

    delta
}
