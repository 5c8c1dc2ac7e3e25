//! The portal's three per-case report views.
//!
//! Each tab is served by its own endpoint and expects its own payload root
//! key; both are fixed by the portal and tied together here so a tab can
//! never be paired with the wrong endpoint.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// One of the three server-side report views for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// 사건내역 — case details.
    CaseDetail,
    /// 기일내역 — auction date / schedule history.
    ScheduleHistory,
    /// 문건/송달내역 — document and service-of-process history.
    DocumentDelivery,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::CaseDetail, Tab::ScheduleHistory, Tab::DocumentDelivery];

    /// The Korean label the portal (and our CLI) uses for this tab.
    pub fn label(self) -> &'static str {
        match self {
            Tab::CaseDetail => "사건내역",
            Tab::ScheduleHistory => "기일내역",
            Tab::DocumentDelivery => "문건/송달내역",
        }
    }

    /// Endpoint path, relative to the portal root.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Tab::CaseDetail => "/pgj/pgj15A/selectAuctnCsSrchRslt.on",
            Tab::ScheduleHistory => "/pgj/pgj15A/selectCsDtlDxdyDts.on",
            Tab::DocumentDelivery => "/pgj/pgj15A/selectDlvrOfdocDtsDtl.on",
        }
    }

    /// Root key the endpoint expects wrapping the JSON request body.
    pub fn payload_key(self) -> &'static str {
        match self {
            Tab::CaseDetail => "dma_srchCsDtlInf",
            Tab::ScheduleHistory => "dma_srchDxdyDtsLst",
            Tab::DocumentDelivery => "dma_srchDlvrOfdocDts",
        }
    }

    pub fn from_label(label: &str) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.label() == label)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::from_label(s).ok_or_else(|| QueryError::UnknownTab(s.to_string()))
    }
}
