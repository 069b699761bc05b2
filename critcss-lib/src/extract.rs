//! Top-level extraction driver.
//!
//! Wires the parser, the compiled selector patterns, and the container
//! rewrite together: parse the source, keep the matching rules, rebuild
//! conditional containers around their kept content, and serialize the
//! result back to CSS text.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::parser::crit_css;
use crate::select::selector_matcher::SelectorPatterns;
use crate::select::wanted::WantedSelectors;
use crate::sheet::rule_tree::{ConditionalRule, Rule, Stylesheet};

/// Where the CSS comes from. Explicit on purpose: the caller says whether
/// the string is a path or inline CSS, and nothing is inferred from its
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssSource {
    Path(PathBuf),
    Inline(String),
}

impl CssSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        CssSource::Path(path.into())
    }

    pub fn inline(css: impl Into<String>) -> Self {
        CssSource::Inline(css.into())
    }

    fn read(&self) -> Result<Cow<'_, str>> {
        match self {
            CssSource::Path(path) => Ok(Cow::Owned(fs::read_to_string(path)?)),
            CssSource::Inline(css) => Ok(Cow::Borrowed(css)),
        }
    }
}

/// Extracts the rules relevant to `wanted` from `source` and returns them
/// serialized as CSS text.
///
/// The call is a pure projection: the input is parsed once, never mutated,
/// and kept rules appear in the output in their input order, with
/// `@media`/`@supports` containers rebuilt around their kept content.
/// Containers that would end up empty are not emitted at all.
pub fn extract(source: &CssSource, wanted: &WantedSelectors) -> Result<String> {
    let css = source.read()?;
    let sheet = crit_css::parse_stylesheet(&css)?;
    let patterns = SelectorPatterns::compile(wanted);

    let mut output = Stylesheet::new();
    for rule in &sheet.rules {
        match rule {
            Rule::Style(style) => {
                if patterns.matches_selector(&style.selector) {
                    output.rules.push(rule.clone());
                }
            }
            Rule::Conditional(container) => {
                if let Some(kept) = rewrite_container(container, &patterns) {
                    output.rules.push(Rule::Conditional(kept));
                }
            }
        }
    }

    log::debug!(
        "kept {} of {} top-level rules",
        output.rules.len(),
        sheet.rules.len()
    );
    Ok(output.to_string())
}

/// Classes-only extraction, matching the original single-set API.
pub fn extract_legacy(source: &CssSource, wanted_classes: &HashSet<String>) -> Result<String> {
    let wanted = WantedSelectors {
        classes: wanted_classes.clone(),
        ..Default::default()
    };
    extract(source, &wanted)
}

/// Rebuilds one conditional container around its kept content, depth-first.
/// Returns `None` when nothing inside was kept, so a parent never emits an
/// empty container.
fn rewrite_container(
    container: &ConditionalRule,
    patterns: &SelectorPatterns,
) -> Option<ConditionalRule> {
    let mut kept = Vec::new();
    for rule in &container.rules {
        match rule {
            Rule::Style(style) => {
                if patterns.matches_selector(&style.selector) {
                    kept.push(rule.clone());
                }
            }
            Rule::Conditional(inner) => {
                if let Some(rewritten) = rewrite_container(inner, patterns) {
                    kept.push(Rule::Conditional(rewritten));
                }
            }
        }
    }

    if kept.is_empty() {
        None
    } else {
        Some(ConditionalRule {
            kind: container.kind,
            condition: container.condition.clone(),
            rules: kept,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inline(css: &str) -> CssSource {
        CssSource::inline(css)
    }

    #[test]
    fn test_media_block_is_pruned() {
        let css = "@media (min-width: 768px) { .btn { color: red; } .unused { display: none; } }";
        let out = extract(&inline(css), &WantedSelectors::from_classes(["btn"])).unwrap();

        let expected = "\
@media (min-width: 768px) {
  .btn { color: red; }
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_media_block_is_not_emitted() {
        let css = ".btn { color: red; }\n@media print { .unused { display: none; } }";
        let out = extract(&inline(css), &WantedSelectors::from_classes(["btn"])).unwrap();
        assert_eq!(out, ".btn { color: red; }\n");
    }

    #[test]
    fn test_nested_containers_are_rebuilt() {
        let css = "@media (min-width: 768px) { @supports (display: grid) { .btn { color: red; } } }";
        let out = extract(&inline(css), &WantedSelectors::from_classes(["btn"])).unwrap();

        let expected = "\
@media (min-width: 768px) {
  @supports (display: grid) {
    .btn { color: red; }
  }
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_order_is_preserved() {
        let css = ".z { a: 1; } .unused { b: 2; } .a { c: 3; } .m { d: 4; }";
        let wanted = WantedSelectors::from_classes(["z", "a", "m"]);
        let out = extract(&inline(css), &wanted).unwrap();
        assert_eq!(out, ".z { a: 1; }\n.a { c: 3; }\n.m { d: 4; }\n");
    }

    #[test]
    fn test_extract_legacy_matches_classes_only() {
        let css = ".btn { x: 1; } #btn { y: 2; }";
        let wanted: HashSet<String> = ["btn".to_string()].into_iter().collect();
        let out = extract_legacy(&inline(css), &wanted).unwrap();
        assert_eq!(out, ".btn { x: 1; }\n");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = CssSource::path("/definitely/not/here.css");
        let err = extract(&source, &WantedSelectors::default()).unwrap_err();
        assert!(matches!(err, crate::error::ExtractError::Io(_)));
    }
}
