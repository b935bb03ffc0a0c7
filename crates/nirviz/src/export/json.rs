//! JSON report export.

use serde::Serialize;

use nirviz_core::structure::{ExtractionResult, Metadata, ModelStructure};

use crate::NirvizError;

#[derive(Serialize)]
struct Report<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    structure: Option<&'a ModelStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ExtractionResult> for Report<'a> {
    fn from(result: &'a ExtractionResult) -> Self {
        Self {
            success: result.is_success(),
            model_name: result.model_name(),
            structure: result.structure(),
            metadata: result.metadata(),
            error: result.error(),
        }
    }
}

/// Serializes `result` as a pretty-printed JSON report.
///
/// A success carries `model_name`, `structure` and `metadata`; a failure
/// carries only `error`. Both carry `success`.
///
/// # Errors
///
/// Returns [`NirvizError::Export`] if serialization fails.
pub fn to_json(result: &ExtractionResult) -> Result<String, NirvizError> {
    Ok(serde_json::to_string_pretty(&Report::from(result))?)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use nirviz_core::structure::{ConnectionRecord, NodeRecord};

    use super::*;

    #[test]
    fn test_success_report() {
        let result = ExtractionResult::Success {
            model_name: "simple.json".to_string(),
            structure: ModelStructure::new(
                vec![
                    NodeRecord::positional(0, "Input"),
                    NodeRecord::positional(1, "Output"),
                ],
                vec![ConnectionRecord::forward("node_0", "node_1")],
            ),
            metadata: Metadata::nir(2),
        };

        let value: Value = serde_json::from_str(&to_json(&result).expect("export")).expect("json");
        assert_eq!(
            value,
            json!({
                "success": true,
                "model_name": "simple.json",
                "structure": {
                    "nodes": [
                        {"id": "node_0", "type": "Input", "name": "node_0"},
                        {"id": "node_1", "type": "Output", "name": "node_1"}
                    ],
                    "connections": [
                        {"from": "node_0", "to": "node_1", "type": "forward"}
                    ]
                },
                "metadata": {"model_type": "NIR", "total_parameters": 2}
            })
        );
    }

    #[test]
    fn test_failure_report() {
        let result = ExtractionResult::failure("file not found");

        let value: Value = serde_json::from_str(&to_json(&result).expect("export")).expect("json");
        assert_eq!(value, json!({"success": false, "error": "file not found"}));
    }

    #[test]
    fn test_report_is_pretty_printed() {
        let text = to_json(&ExtractionResult::failure("x")).expect("export");
        assert!(text.contains('\n'));
    }
}
