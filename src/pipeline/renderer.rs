// Builds the constant block and the mapping block from matched entries

use std::fmt::Write;

use crate::model::Entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub constants: String,
    pub mapping: String,
}

/// Both fragments list entries in encounter order, one line per entry.
pub fn render(entries: &[Entry]) -> Fragments {
    Fragments {
        constants: render_constants(entries),
        mapping: render_mapping(entries),
    }
}

pub fn render_constants(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = match &entry.comment {
            Some(comment) => writeln!(
                out,
                "pub const {}: u32 = {}; // {}",
                entry.name, entry.value, comment
            ),
            None => writeln!(out, "pub const {}: u32 = {};", entry.name, entry.value),
        };
    }
    out
}

pub fn render_mapping(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "({:?}, {:#x}),", entry.name, entry.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("XC_num_glyphs", 154),
            Entry::new("XC_X_cursor", 0),
            Entry::new("XC_arrow", 2).with_comment("standard arrow"),
        ]
    }

    #[test]
    fn test_constant_lines() {
        let constants = render_constants(&sample());
        assert_eq!(
            constants,
            "pub const XC_num_glyphs: u32 = 154;\n\
             pub const XC_X_cursor: u32 = 0;\n\
             pub const XC_arrow: u32 = 2; // standard arrow\n"
        );
    }

    #[test]
    fn test_mapping_lines_are_hex() {
        let mapping = render_mapping(&sample());
        assert_eq!(
            mapping,
            "(\"XC_num_glyphs\", 0x9a),\n\
             (\"XC_X_cursor\", 0x0),\n\
             (\"XC_arrow\", 0x2),\n"
        );
    }

    #[test]
    fn test_order_preserved() {
        let entries = sample();
        let fragments = render(&entries);

        let names: Vec<_> = fragments
            .mapping
            .lines()
            .map(|l| l.split('"').nth(1).unwrap())
            .collect();
        assert_eq!(names, ["XC_num_glyphs", "XC_X_cursor", "XC_arrow"]);
        assert_eq!(fragments.constants.lines().count(), entries.len());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(&[]), Fragments::default());
    }
}
