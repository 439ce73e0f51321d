//! Read-only estimation-error tables for the results page.
//!
//! The numbers are produced offline by the inference experiments and shipped
//! as static JSON; this module only parses and serves them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Percentage error of one estimation method on one model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodError {
    /// Method identifier (e.g. "mle", "moment").
    pub method: String,
    /// Relative error in percent.
    pub error_pct: f64,
}

/// Errors of every method on one (model, dimension) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultRow {
    /// Model key, matching the registry.
    pub model: String,
    /// Spatial dimension of the experiment.
    pub dim: usize,
    /// Per-method errors.
    pub errors: Vec<MethodError>,
}

/// A full result table as shipped on the results page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultTable {
    /// All rows, in display order.
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Parse a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Rows for one model, in display order.
    pub fn for_model<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a ResultRow> {
        self.rows.iter().filter(move |r| r.model == model)
    }
}
