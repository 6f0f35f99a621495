//! Per-lead result of a submission attempt.

use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;

use super::response::LeadSendingResponse;
use crate::error_handling::TransportError;

/// Wire code used for server and transport failures.
pub const STATUS_ERROR: &str = "error";

/// Coarse classification of a response `status` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SendStatus {
    Success,
    Fail,
    Error,
    Unrecognized,
}

impl SendStatus {
    /// Classifies a wire status code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "success" => SendStatus::Success,
            "fail" => SendStatus::Fail,
            STATUS_ERROR => SendStatus::Error,
            _ => SendStatus::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SendStatus::Success => "success",
            SendStatus::Fail => "fail",
            SendStatus::Error => "error",
            SendStatus::Unrecognized => "unrecognized",
        }
    }
}

/// What the API said about one lead.
///
/// Codes are kept exactly as received so that unknown values can be echoed
/// to the result file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub status: String,
    pub lead_status: String,
    pub reject_reason: String,
    pub lead_id: Option<i64>,
    pub message: String,
}

impl Reply {
    /// Copies the status/message/data triple of a 200 response.
    pub fn from_response(response: LeadSendingResponse) -> Self {
        Self {
            status: response.status,
            lead_status: response.data.lead_status,
            reject_reason: response.data.reject_reason,
            lead_id: response.data.lead_id,
            message: response.message,
        }
    }

    /// Reply for a non-200 HTTP status, whatever the body said.
    pub fn http_error(status: StatusCode) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: format!("HTTP {}", status),
            ..Default::default()
        }
    }

    /// Reply for a lead whose request never completed.
    pub fn transport_error(error: &TransportError) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: error.to_string(),
            ..Default::default()
        }
    }

    pub fn kind(&self) -> SendStatus {
        SendStatus::from_code(&self.status)
    }
}
