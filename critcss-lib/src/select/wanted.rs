use serde::Deserialize;
use std::collections::HashSet;

/// The selectors discovered above the fold on a rendered page.
///
/// Each field is an independent set; a missing or empty field simply
/// contributes no patterns. This is the only configuration input the
/// extraction engine takes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WantedSelectors {
    /// Class names without the leading `.`, e.g. "btn".
    pub classes: HashSet<String>,
    /// Id names without the leading `#`, e.g. "header".
    pub ids: HashSet<String>,
    /// Element names, e.g. "div".
    pub elements: HashSet<String>,
    /// Exact multi-part selectors treated as one match target,
    /// e.g. "div.card" or "#header .navbar".
    pub combinations: HashSet<String>,
}

impl WantedSelectors {
    /// Classes-only configuration, as used by the legacy entry point.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WantedSelectors {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.ids.is_empty()
            && self.elements.is_empty()
            && self.combinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_fields() {
        let wanted: WantedSelectors =
            serde_json::from_str(r#"{ "classes": ["btn", "btn"] }"#).unwrap();
        assert_eq!(wanted.classes.len(), 1);
        assert!(wanted.ids.is_empty());
        assert!(wanted.elements.is_empty());
        assert!(wanted.combinations.is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(WantedSelectors::default().is_empty());
        assert!(!WantedSelectors::from_classes(["btn"]).is_empty());
    }
}
