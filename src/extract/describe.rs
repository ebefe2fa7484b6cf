//! Description building from captured `///` lines.

use crate::model::DocField;
use regex::Regex;
use std::sync::LazyLock;

// `FuncId = "turn_led"`, `Input = u8,bool`; `a == b` is prose, not a field
static RE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*([^=\s].*)$").unwrap());

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn normalize_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join captured doc lines into a description: one normalized line per
/// comment line, each terminated by `\n`.
pub fn build_description<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut desc = String::new();
    for line in lines {
        desc.push_str(&normalize_line(line));
        desc.push('\n');
    }
    desc
}

/// Pull `Key = value` pairs out of doc lines.
pub fn fields<'a, I>(lines: I) -> Vec<DocField>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = normalize_line(line);
            let caps = RE_FIELD.captures(&line)?;
            let value = caps[2].trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some(DocField {
                key: caps[1].to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
