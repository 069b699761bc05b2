use std::fmt;

pub mod rule_tree {
    use super::*;

    /// A parsed stylesheet: an ordered list of top-level rules.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Stylesheet {
        pub rules: Vec<Rule>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Rule {
        Style(StyleRule),
        Conditional(ConditionalRule),
    }

    /// A plain style rule. The selector is kept exactly as written and the
    /// declaration block is an opaque payload the engine never inspects.
    #[derive(Debug, Clone, PartialEq)]
    pub struct StyleRule {
        /// e.g. "div.card", ".btn:hover", "#header .navbar"
        pub selector: String,
        /// Raw declaration text, e.g. "padding: 10px 20px; border: none;"
        pub declarations: String,
    }

    /// Which conditional at-rule a container came from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ConditionalKind {
        Media,
        Supports,
    }

    /// An `@media` or `@supports` block with its nested rules.
    /// Containers may nest containers.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ConditionalRule {
        pub kind: ConditionalKind,
        /// Condition text as written, e.g. "(min-width: 768px)"
        pub condition: String,
        pub rules: Vec<Rule>,
    }

    impl Stylesheet {
        pub fn new() -> Self {
            Stylesheet { rules: Vec::new() }
        }

        pub fn is_empty(&self) -> bool {
            self.rules.is_empty()
        }
    }

    impl ConditionalKind {
        pub fn keyword(&self) -> &'static str {
            match self {
                ConditionalKind::Media => "@media",
                ConditionalKind::Supports => "@supports",
            }
        }
    }

    fn write_rule(f: &mut fmt::Formatter<'_>, rule: &Rule, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match rule {
            Rule::Style(style) => {
                if style.declarations.is_empty() {
                    writeln!(f, "{}{} {{ }}", indent, style.selector)
                } else {
                    writeln!(f, "{}{} {{ {} }}", indent, style.selector, style.declarations)
                }
            }
            Rule::Conditional(container) => {
                if container.condition.is_empty() {
                    writeln!(f, "{}{} {{", indent, container.kind.keyword())?;
                } else {
                    writeln!(
                        f,
                        "{}{} {} {{",
                        indent,
                        container.kind.keyword(),
                        container.condition
                    )?;
                }
                for nested in &container.rules {
                    write_rule(f, nested, depth + 1)?;
                }
                writeln!(f, "{}}}", indent)
            }
        }
    }

    impl fmt::Display for Stylesheet {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for rule in &self.rules {
                write_rule(f, rule, 0)?;
            }
            Ok(())
        }
    }

    impl fmt::Display for Rule {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_rule(f, self, 0)
        }
    }
}
