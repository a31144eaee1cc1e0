// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Response envelope returned by the notes backend.
//!
//! On the wire both variants are JSON objects discriminated by a boolean
//! `success` field:
//!
//! ```json
//! { "success": true, "message": "Folders loaded", "data": [...] }
//! { "success": false, "error": { "message": "Not found", "code": "NOT_FOUND", "statusCode": 404 } }
//! ```

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Error detail carried by a failed response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}{}", detail_suffix(.code, .status_code))]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ApiErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status_code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

fn detail_suffix(code: &Option<String>, status_code: &Option<u16>) -> String {
    match (code, status_code) {
        (Some(code), Some(status)) => format!(" (code {code}, status {status})"),
        (Some(code), None) => format!(" (code {code})"),
        (None, Some(status)) => format!(" (status {status})"),
        (None, None) => String::new(),
    }
}

/// Either a successful payload with a human-readable message, or an error detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success { message: String, data: T },
    Error { error: ApiErrorDetail },
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::Success {
            message: message.into(),
            data,
        }
    }

    pub fn error(error: ApiErrorDetail) -> Self {
        Self::Error { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Human-readable message of either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } => message,
            Self::Error { error } => &error.message,
        }
    }

    /// Drop the envelope, keeping the payload or the error detail.
    pub fn into_result(self) -> Result<T, ApiErrorDetail> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Error { error } => Err(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { message, data } => {
                let mut state = serializer.serialize_struct("ApiResponse", 3)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("message", message)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Error { error } => {
                let mut state = serializer.serialize_struct("ApiResponse", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

/// Flat wire form before the `success` flag picks a variant.
///
/// `data` is `None` only when the field is absent; an explicit `null` is
/// handed to `T` so payloads like `()` or `Option<_>` survive.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, deserialize_with = "present")]
    data: Option<T>,
    error: Option<ApiErrorDetail>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        if raw.success {
            let data = raw.data.ok_or_else(|| <D::Error as de::Error>::missing_field("data"))?;
            Ok(Self::Success {
                message: raw.message.unwrap_or_default(),
                data,
            })
        } else {
            let error = raw.error.ok_or_else(|| <D::Error as de::Error>::missing_field("error"))?;
            Ok(Self::Error { error })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ApiErrorDetail, ApiResponse};
    use crate::models::folder::Folder;

    #[test]
    fn success_envelope_serializes_with_flag_message_and_data() {
        let response = ApiResponse::success("Folders loaded", vec![Folder::new("a", "Alpha")]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "message": "Folders loaded",
                "data": [{"id": "a", "name": "Alpha"}]
            })
        );
    }

    #[test]
    fn error_envelope_parses_optional_code_and_status() {
        let raw = r#"{"success":false,"error":{"message":"Not found","code":"NOT_FOUND","statusCode":404}}"#;
        let response: ApiResponse<Vec<Folder>> = serde_json::from_str(raw).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.message(), "Not found");
        let err = response.into_result().unwrap_err();
        assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(err.status_code, Some(404));
        assert_eq!(err.to_string(), "Not found (code NOT_FOUND, status 404)");
    }

    #[test]
    fn error_envelope_without_optional_fields_omits_them() {
        let response: ApiResponse<()> = ApiResponse::error(ApiErrorDetail::new("Boom"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": {"message": "Boom"}})
        );
        assert_eq!(ApiErrorDetail::new("Boom").to_string(), "Boom");
        assert_eq!(
            ApiErrorDetail::new("Boom").with_status(500).to_string(),
            "Boom (status 500)"
        );
        assert_eq!(
            ApiErrorDetail::new("Boom").with_code("E_BOOM").to_string(),
            "Boom (code E_BOOM)"
        );
    }

    #[test]
    fn success_envelope_round_trips_through_json() {
        let original = ApiResponse::success("ok", 42u32);
        let text = serde_json::to_string(&original).unwrap();
        let parsed: ApiResponse<u32> = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(parsed.into_result().unwrap(), 42);
    }

    // A `null` payload is a value, not a missing field.
    #[test]
    fn success_envelope_with_null_payload_round_trips() {
        let unit = ApiResponse::success("deleted", ());
        let text = serde_json::to_string(&unit).unwrap();
        assert_eq!(text, r#"{"success":true,"message":"deleted","data":null}"#);
        let parsed: ApiResponse<()> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, unit);

        let none: ApiResponse<Option<u32>> = ApiResponse::success("empty", None);
        let text = serde_json::to_string(&none).unwrap();
        let parsed: ApiResponse<Option<u32>> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, none);
    }

    #[test]
    fn envelope_missing_variant_payload_is_rejected() {
        assert!(serde_json::from_str::<ApiResponse<u32>>(r#"{"success":true,"message":"x"}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse<u32>>(r#"{"success":false}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse<u32>>(r#"{"message":"x","data":1}"#).is_err());
    }

    #[test]
    fn success_envelope_without_message_defaults_to_empty() {
        let parsed: ApiResponse<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(parsed.message(), "");
        assert!(parsed.is_success());
    }
}
