//! Shared plumbing for the third-party JSON clients.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::errors::ProviderError;

pub(crate) fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

/// Pull the provider's own error message out of an error body.
///
/// Providers answer `{"message": ".."}` (sometimes with `reason` or `error`);
/// anything else falls back to the raw body or the HTTP status text.
pub(crate) fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "reason", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
    });
    from_json.unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            format!("Request failed with status code {}", status.as_u16())
        } else {
            body.to_string()
        }
    })
}

/// Decode a JSON body on success, or turn the provider's error into `ProviderError::Upstream`
pub(crate) async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ProviderError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ProviderError::Upstream(upstream_message(status, &body)));
    }
    let bytes = resp.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Prefix an error's message the way a provider-specific client reports it
pub(crate) fn prefixed(prefix: &str, err: ProviderError) -> ProviderError {
    match err {
        ProviderError::MissingApiKey(_) => err,
        other => ProviderError::Upstream(format!("{prefix}{other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_upstream_message_prefers_json_message() {
        let msg = upstream_message(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"Order is not valid","reason":"OrderIsNotValid"}"#);
        assert_eq!(msg, "Order is not valid");
    }

    #[test]
    fn test_upstream_message_falls_back_to_status() {
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, ""),
            "Request failed with status code 502"
        );
        assert_eq!(upstream_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
    }

    #[test]
    fn test_prefixed_keeps_missing_key_errors() {
        let err = prefixed("Failed: ", ProviderError::MissingApiKey("CoinGate"));
        assert!(matches!(err, ProviderError::MissingApiKey("CoinGate")));

        let err = prefixed("Failed: ", ProviderError::Upstream("boom".to_string()));
        assert_eq!(err.to_string(), "Failed: boom");
    }
}
