//! This module contains functions for parsing CSS text into a rule tree.
//!
//! It uses cssparser as the tokenizer and builds the tree defined in the
//! `crate::sheet::rule_tree` module. Selector texts, condition texts, and
//! declaration blocks are captured as raw source slices, so their content
//! survives extraction byte-for-byte (edges trimmed).

use crate::error::{ExtractError, Result};
use crate::sheet::rule_tree::{ConditionalKind, ConditionalRule, Rule, StyleRule, Stylesheet};
use cssparser::{
    BasicParseErrorKind, ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token,
};

/// Parses CSS source text into a [`Stylesheet`].
///
/// `@media` and `@supports` blocks become conditional containers and are
/// parsed recursively; every other at-rule is consumed and dropped, since
/// the extraction engine has no use for it.
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let rules = parse_rule_list(&mut parser).map_err(into_extract_error)?;
    Ok(Stylesheet { rules })
}

fn into_extract_error(error: CssParseError<'_, &'static str>) -> ExtractError {
    let message = match &error.kind {
        ParseErrorKind::Custom(message) => (*message).to_string(),
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of stylesheet".to_string()
        }
        ParseErrorKind::Basic(other) => format!("{:?}", other),
    };
    ExtractError::Parse {
        message,
        // cssparser lines are 0-based, columns 1-based.
        line: error.location.line + 1,
        column: error.location.column,
    }
}

/// Parses a run of rules until the input (or the enclosing block) ends.
fn parse_rule_list<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Rule>, CssParseError<'i, &'static str>> {
    let mut rules = Vec::new();

    loop {
        let state = parser.state();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break, // end of input / end of block
        };

        match token {
            // Legacy HTML comment delimiters are allowed between rules.
            Token::CDO | Token::CDC => {}
            Token::CloseCurlyBracket => {
                return Err(parser.new_custom_error("unexpected '}' outside of any block"));
            }
            Token::AtKeyword(name) => {
                let name = name.to_string();
                if let Some(rule) = parse_at_rule(parser, &name)? {
                    rules.push(rule);
                }
            }
            _ => {
                parser.reset(&state);
                rules.push(Rule::Style(parse_style_rule(parser)?));
            }
        }
    }

    Ok(rules)
}

/// Parses one qualified rule: `selector { declarations }`.
fn parse_style_rule<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<StyleRule, CssParseError<'i, &'static str>> {
    // The caller rewound to before the first selector token; advance over
    // the whitespace and comments in front of it so they stay out of the
    // selector slice.
    parser.skip_whitespace();
    let start = parser.position();

    loop {
        let before = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => {
                return Err(parser.new_custom_error("selector without a declaration block"));
            }
        };

        match token {
            Token::CurlyBracketBlock => {
                let selector = parser.slice(start..before).trim().to_string();
                let declarations = parser.parse_nested_block(raw_block_text)?;
                return Ok(StyleRule {
                    selector,
                    declarations,
                });
            }
            // Inner blocks (attribute selectors, `:not(...)`) must be
            // drained eagerly: the tokenizer only skips an unconsumed
            // block on the following `next()` call, which would leave
            // the position captured above stuck inside the block.
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                skip_nested_block(parser)?;
            }
            Token::BadString(_) => {
                return Err(parser.new_custom_error("unterminated string in selector"));
            }
            Token::BadUrl(_) => {
                return Err(parser.new_custom_error("invalid url token in selector"));
            }
            _ => {}
        }
    }
}

/// Parses one at-rule whose `@name` token is already consumed. Returns
/// `Some` for `@media`/`@supports` containers, `None` for anything else
/// (the rule is still consumed so parsing can continue behind it).
fn parse_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
) -> std::result::Result<Option<Rule>, CssParseError<'i, &'static str>> {
    let kind = if name.eq_ignore_ascii_case("media") {
        Some(ConditionalKind::Media)
    } else if name.eq_ignore_ascii_case("supports") {
        Some(ConditionalKind::Supports)
    } else {
        None
    };

    let prelude_start = parser.position();

    loop {
        let before = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => {
                return Err(parser.new_custom_error("unterminated at-rule"));
            }
        };

        match token {
            Token::CurlyBracketBlock => {
                let condition = parser.slice(prelude_start..before).trim().to_string();
                return match kind {
                    Some(kind) => {
                        let rules = parser.parse_nested_block(parse_rule_list)?;
                        Ok(Some(Rule::Conditional(ConditionalRule {
                            kind,
                            condition,
                            rules,
                        })))
                    }
                    None => {
                        log::debug!("dropping unsupported at-rule @{}", name);
                        parser.parse_nested_block(raw_block_text)?;
                        Ok(None)
                    }
                };
            }
            // Block-less at-rule such as `@import` or `@charset`.
            Token::Semicolon => {
                log::debug!("dropping block-less at-rule @{}", name);
                return Ok(None);
            }
            // Condition parentheses, same lazy-skip hazard as in
            // `parse_style_rule`: drain now so the position captured at
            // the top of the loop sits past the block.
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                skip_nested_block(parser)?;
            }
            Token::BadString(_) => {
                return Err(parser.new_custom_error("unterminated string in at-rule prelude"));
            }
            Token::BadUrl(_) => {
                return Err(parser.new_custom_error("invalid url token in at-rule prelude"));
            }
            _ => {}
        }
    }
}

/// Consumes the current nested block and returns its raw source text.
/// Interior whitespace and comments are preserved; the edges are trimmed.
fn raw_block_text<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<String, CssParseError<'i, &'static str>> {
    let start = parser.position();

    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::BadString(_) => {
                return Err(parser.new_custom_error("unterminated string in declaration block"));
            }
            Token::BadUrl(_) => {
                return Err(parser.new_custom_error("invalid url token in declaration block"));
            }
            // Inner blocks (e.g. braces inside custom property values) are
            // skipped by the tokenizer on the following `next()` call and
            // end up in the raw slice unchanged.
            _ => {}
        }
    }

    Ok(parser.slice_from(start).trim().to_string())
}

/// Consumes the contents of the block token just returned by `next()`,
/// leaving the parser position immediately after its closing delimiter.
fn skip_nested_block<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<(), CssParseError<'i, &'static str>> {
    parser.parse_nested_block(|block| {
        while block.next().is_ok() {}
        Ok(())
    })
}
