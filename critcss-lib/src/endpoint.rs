//! Adapter for the page-analysis service response.
//!
//! The service answers with a JSON payload carrying either a structured
//! `wantedSelectors` record or a legacy flat `wantedClasses` list. This
//! module normalizes that payload into [`WantedSelectors`] and forwards to
//! the extraction driver. It is a format-translation shim, not engine
//! logic.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::error::{ExtractError, Result};
use crate::extract::{extract, CssSource};
use crate::select::wanted::WantedSelectors;

/// The subset of the service payload the engine cares about. Extra fields
/// (`url`, `stats`, ...) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResponse {
    #[serde(default)]
    pub success: bool,
    /// Preferred: structured selector record, arrays collapsed to sets.
    #[serde(default)]
    pub wanted_selectors: Option<WantedSelectors>,
    /// Legacy fallback: flat list of class names.
    #[serde(default)]
    pub wanted_classes: Option<HashSet<String>>,
}

impl EndpointResponse {
    /// Normalizes the payload into the engine's configuration shape.
    pub fn wanted(&self) -> WantedSelectors {
        if let Some(wanted) = &self.wanted_selectors {
            wanted.clone()
        } else if let Some(classes) = &self.wanted_classes {
            WantedSelectors {
                classes: classes.clone(),
                ..Default::default()
            }
        } else {
            WantedSelectors::default()
        }
    }
}

/// Runs extraction with the wanted selectors taken from a page-analysis
/// service response.
///
/// Fails with [`ExtractError::Input`] when the payload cannot be
/// deserialized or its own `success` flag is falsy (or absent).
pub fn extract_from_endpoint_response(source: &CssSource, response: &Value) -> Result<String> {
    let response: EndpointResponse = serde_json::from_value(response.clone())
        .map_err(|e| ExtractError::Input(format!("malformed endpoint response: {}", e)))?;
    if !response.success {
        return Err(ExtractError::Input(
            "endpoint reported success = false".to_string(),
        ));
    }
    extract(source, &response.wanted())
}
