//! Query construction: resolves caller input against the reference tables
//! into an endpoint path and a JSON request body.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::case::case_identifier;
use crate::court::court_code;
use crate::error::QueryError;
use crate::tab::Tab;

/// Inner body of a portal query, serialized with the portal's field names.
#[derive(Debug, Clone, Serialize)]
pub struct CaseQuery {
    #[serde(rename = "cortOfcCd")]
    pub court_code: String,
    #[serde(rename = "csNo")]
    pub case_id: String,
    /// Only the document/delivery endpoint takes this; `"F"` requests the
    /// full document list.
    #[serde(rename = "srchFlag", skip_serializing_if = "Option::is_none")]
    pub search_flag: Option<&'static str>,
}

/// A fully-resolved portal query: which endpoint to POST to, and the JSON
/// body to send. Construction validates all caller input; a `QueryRequest`
/// that exists is sendable.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub tab: Tab,
    pub body: Value,
}

impl QueryRequest {
    pub fn new(court: &str, case_no: &str, tab: Tab) -> Result<Self, QueryError> {
        let code =
            court_code(court).ok_or_else(|| QueryError::UnknownCourt(court.to_string()))?;
        let inner = CaseQuery {
            court_code: code.to_string(),
            case_id: case_identifier(case_no)?,
            search_flag: (tab == Tab::DocumentDelivery).then_some("F"),
        };

        // The envelope has a single root key that varies per tab, so the
        // outer layer is a map rather than a derived struct.
        let mut envelope = Map::new();
        envelope.insert(tab.payload_key().to_string(), serde_json::to_value(&inner)?);

        Ok(QueryRequest {
            tab,
            body: Value::Object(envelope),
        })
    }

    /// Endpoint path this query targets, relative to the portal root.
    pub fn endpoint_path(&self) -> &'static str {
        self.tab.endpoint_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schedule_history_body() {
        let req = QueryRequest::new("서울중앙지방법원", "2022타경3944", Tab::ScheduleHistory)
            .unwrap();
        assert_eq!(req.endpoint_path(), "/pgj/pgj15A/selectCsDtlDxdyDts.on");
        assert_eq!(
            req.body,
            json!({
                "dma_srchDxdyDtsLst": {
                    "cortOfcCd": "B000210",
                    "csNo": "202201300003944",
                }
            })
        );
    }

    #[test]
    fn document_delivery_adds_search_flag() {
        let req = QueryRequest::new("부산지방법원", "2021타경52", Tab::DocumentDelivery).unwrap();
        assert_eq!(
            req.body,
            json!({
                "dma_srchDlvrOfdocDts": {
                    "cortOfcCd": "B000410",
                    "csNo": "202101300000052",
                    "srchFlag": "F",
                }
            })
        );
    }

    #[test]
    fn single_root_key_per_tab() {
        for tab in Tab::ALL {
            let req = QueryRequest::new("서울중앙지방법원", "2022타경3944", tab).unwrap();
            let envelope = req.body.as_object().unwrap();
            assert_eq!(envelope.len(), 1);
            let inner = envelope[tab.payload_key()].as_object().unwrap();
            assert!(inner.contains_key("cortOfcCd"));
            assert!(inner.contains_key("csNo"));
            assert_eq!(
                inner.contains_key("srchFlag"),
                tab == Tab::DocumentDelivery,
                "srchFlag presence wrong for {tab:?}"
            );
        }
    }

    #[test]
    fn unknown_court_rejected() {
        let err = QueryRequest::new("화성지방법원", "2022타경3944", Tab::CaseDetail).unwrap_err();
        assert!(matches!(err, QueryError::UnknownCourt(name) if name == "화성지방법원"));
    }

    #[test]
    fn malformed_case_number_rejected() {
        let err = QueryRequest::new("서울중앙지방법원", "20223944", Tab::CaseDetail).unwrap_err();
        assert!(matches!(err, QueryError::MalformedCaseNumber { .. }));
    }
}
