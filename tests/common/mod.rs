pub mod fixtures;
pub mod geometry_assertions;

use serde_json::Value;
use trellis::{Document, LayoutReport, TrellisError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parse a JSON document and lay it out.
pub fn layout_document(document: &Value) -> Result<LayoutReport, TrellisError> {
    let json = serde_json::to_string(document)?;
    Document::from_json(&json)?.layout()
}

/// Find the report node with the given name.
pub fn node<'a>(
    report: &'a LayoutReport,
    name: &str,
) -> Result<&'a trellis::ReportNode, Box<dyn std::error::Error>> {
    report
        .find(name)
        .ok_or_else(|| format!("no node named '{}' in report", name).into())
}
