//! Critical-CSS rule-selection engine.
//!
//! Given a stylesheet and the selectors discovered above the fold on a
//! rendered page, this crate extracts the subset of rules that are
//! actually relevant: plain style rules plus rules nested inside
//! `@media`/`@supports` blocks, with the conditional containers rebuilt
//! around the kept content and serialized back to CSS text.
//!
//! ```
//! use critcss_lib::{extract, CssSource, WantedSelectors};
//!
//! let css = ".btn { padding: 10px; }\n.btn-large { padding: 20px; }";
//! let wanted = WantedSelectors::from_classes(["btn"]);
//! let critical = extract(&CssSource::inline(css), &wanted).unwrap();
//! assert_eq!(critical, ".btn { padding: 10px; }\n");
//! ```

pub mod endpoint;
pub mod error;
pub mod extract;
pub mod parser;
pub mod select;
pub mod sheet;

pub use endpoint::{extract_from_endpoint_response, EndpointResponse};
pub use error::{ExtractError, Result};
pub use extract::{extract, extract_legacy, CssSource};
pub use parser::crit_css::parse_stylesheet;
pub use select::wanted::WantedSelectors;
