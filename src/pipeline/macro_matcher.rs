// Recognizes `#define XC_<name> <decimal> [/* comment */]` lines

use regex::Regex;
use std::sync::LazyLock;

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^#define\s+",
        r"(XC_[A-Za-z0-9_]+)\s+",
        r"([0-9]+)",
        r"(?:\s*/\*\s*(.*?)\s*\*/)?",
        r"(?:\s.*)?$",
    ))
    .expect("cursorfont define pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroMatch<'a> {
    pub name: &'a str,
    pub digits: &'a str,
    pub comment: Option<&'a str>,
}

/// Matches one already trimmed line. `None` is the normal outcome for
/// includes, guards, blank lines and anything without the `XC_` prefix.
pub fn match_line(line: &str) -> Option<MacroMatch<'_>> {
    let caps = DEFINE_RE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let digits = caps.get(2)?.as_str();
    let comment = caps
        .get(3)
        .map(|m| m.as_str())
        .filter(|c| !c.is_empty());

    Some(MacroMatch {
        name,
        digits,
        comment,
    })
}
