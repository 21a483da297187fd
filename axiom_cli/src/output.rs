//! The result record printed for each invocation.

use axiom_core::QueryResult;
use serde::Serialize;

use crate::telemetry::{CostSummary, Telemetry};

/// Response, telemetry and cost of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    pub response: QueryResult,
    pub telemetry: Telemetry,
    pub cost_summary: CostSummary,
}

impl ResultRecord {
    pub fn new(response: QueryResult, model_name: &str, cost_summary: CostSummary) -> Self {
        Self {
            response,
            telemetry: Telemetry::new(model_name),
            cost_summary,
        }
    }

    /// Render the record as JSON, pretty-printed unless `compact`.
    pub fn to_json(&self, compact: bool) -> serde_json::Result<String> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axiom_core::Citation;
    use axiom_graph::SourceId;

    fn sample_record() -> ResultRecord {
        ResultRecord::new(
            QueryResult {
                text: "Rust is a systems programming language.".to_string(),
                citations: vec![Citation {
                    source_id: SourceId::from("doc1"),
                    title: "Rust".to_string(),
                    match_score: 0.67,
                }],
            },
            "ADLM",
            CostSummary::from_measurements(0.5, 0),
        )
    }

    #[test]
    fn test_record_layout() {
        let json: serde_json::Value =
            serde_json::from_str(&sample_record().to_json(false).unwrap()).unwrap();

        assert_eq!(json["response"]["text"], "Rust is a systems programming language.");
        assert_eq!(json["response"]["citations"][0]["document_title"], "Rust");
        assert_eq!(json["telemetry"]["model_usage"]["model_name"], "ADLM");
        assert_eq!(json["cost_summary"]["unit"], "local_compute");
        assert_eq!(json["cost_summary"]["cpu_time_ms"], 0.5);
    }

    #[test]
    fn test_compact_is_single_line() {
        let record = sample_record();

        assert!(!record.to_json(true).unwrap().contains('\n'));
        assert!(record.to_json(false).unwrap().contains('\n'));
    }
}
