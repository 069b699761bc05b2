//! Boundary-aware selector matching.
//!
//! Selector text is matched by substring search over the rule's full,
//! unparsed selector, with each wanted entry compiled into one regex that
//! requires the entry to end on a CSS identifier boundary. `.btn` therefore
//! matches `.btn:hover` and `.btn.primary` but never `.btn-large`.

use crate::select::wanted::WantedSelectors;
use regex::Regex;

/// Reset/base selectors that are kept no matter what was requested.
/// Checked as plain substrings of the selector text.
pub const CRITICAL_TOKENS: &[&str] = &["*", "html", "body", ":root"];

/// Matches when the next character cannot continue a CSS identifier.
/// A bare `\b` is not enough: `-` is a regex word boundary but continues
/// a CSS identifier, so `\.btn\b` would accept `.btn-large`.
const IDENT_BOUNDARY: &str = "(?:[^0-9A-Za-z_-]|$)";

/// The compiled patterns for one extraction call. Built once, before any
/// rule is inspected, and reused across the whole rule tree.
#[derive(Debug)]
pub struct SelectorPatterns {
    patterns: Vec<Regex>,
}

impl SelectorPatterns {
    pub fn compile(wanted: &WantedSelectors) -> Self {
        let mut patterns = Vec::new();
        patterns.extend(wanted.classes.iter().filter_map(|c| class_pattern(c)));
        patterns.extend(wanted.ids.iter().filter_map(|i| id_pattern(i)));
        patterns.extend(wanted.elements.iter().filter_map(|e| element_pattern(e)));
        patterns.extend(
            wanted
                .combinations
                .iter()
                .filter_map(|k| combination_pattern(k)),
        );
        log::debug!("compiled {} selector patterns", patterns.len());
        SelectorPatterns { patterns }
    }

    /// Classifies one rule: kept or dropped.
    ///
    /// A rule without usable selector text is dropped unconditionally.
    /// Otherwise it is kept if the selector contains one of the
    /// [`CRITICAL_TOKENS`] or if any compiled pattern matches anywhere in
    /// the selector text. First match wins; there is no scoring.
    pub fn matches_selector(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if selector.is_empty() {
            return false;
        }
        if CRITICAL_TOKENS.iter().any(|token| selector.contains(token)) {
            return true;
        }
        self.patterns.iter().any(|pattern| pattern.is_match(selector))
    }
}

fn class_pattern(name: &str) -> Option<Regex> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(build(&format!(
        r"\.{}{}",
        regex::escape(name),
        IDENT_BOUNDARY
    )))
}

fn id_pattern(name: &str) -> Option<Regex> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(build(&format!("#{}{}", regex::escape(name), IDENT_BOUNDARY)))
}

fn element_pattern(name: &str) -> Option<Regex> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    // The boundary class already covers `.`, `[`, and `#`, so "div"
    // is recognized inside "div.card" or "div[hidden]".
    Some(build(&format!(
        r"\b{}{}",
        regex::escape(name),
        IDENT_BOUNDARY
    )))
}

fn combination_pattern(text: &str) -> Option<Regex> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }
    // Whitespace runs inside the combination match any amount of
    // whitespace; the parts themselves are exact escaped literals.
    let body = parts
        .iter()
        .map(|part| regex::escape(part))
        .collect::<Vec<_>>()
        .join(r"\s+");
    // `\b` before `.` or `#` can never match, so only anchor
    // combinations that open with an identifier character.
    let leading = if text
        .trim_start()
        .starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
    {
        r"\b"
    } else {
        ""
    };
    Some(build(&format!("{}{}{}", leading, body, IDENT_BOUNDARY)))
}

fn build(source: &str) -> Regex {
    // All user-supplied text went through regex::escape, so the pattern
    // source is always valid regex syntax.
    Regex::new(source).expect("escaped selector pattern failed to compile")
}
