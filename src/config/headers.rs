//! Parsing of caller-supplied header strings into a header multi-map.

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::HeaderMap;

use super::error::ConfigError;

/// Builds a header map from `Key=Value` or `Key: Value` strings.
///
/// Repeated names are appended, so every value is sent. When `content_type`
/// is given and the caller supplied no `Content-Type`, it is added.
///
/// # Errors
///
/// Returns an error if a string has no separator, or if a name or value is
/// not a valid HTTP header.
pub fn parse_headers<S: AsRef<str>>(
    raw: &[S],
    content_type: Option<&str>,
) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();

    for header_str in raw {
        let (name, value) = parse_header_string(header_str.as_ref())?;
        let header_name = parse_header_name(&name)?;
        let header_value = parse_header_value(&name, &value)?;
        headers.append(header_name, header_value);
    }

    if let Some(content_type) = content_type.filter(|_| !headers.contains_key(CONTENT_TYPE)) {
        let value = parse_header_value(CONTENT_TYPE.as_str(), content_type)?;
        headers.insert(CONTENT_TYPE, value);
    }

    Ok(headers)
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // Whichever of "Key=Value" or "Key: Value" comes first wins, so values
    // may contain the other separator (e.g. base64 padding).
    s.split_once(['=', ':'])
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| ConfigError::InvalidHeader {
            value: s.to_string(),
        })
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
