use crate::utils::error::{Result, TrackerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TrackerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TrackerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// The key goes into the query string verbatim, so the offending value is
/// never echoed back in the error.
pub fn validate_api_key(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "API key cannot be empty or whitespace-only".to_string(),
        });
    }
    if value.starts_with("${") {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Unresolved environment placeholder".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoints.directory", "https://example.com").is_ok());
        assert!(validate_url(
            "endpoints.directory",
            "http://info.sweettracker.co.kr/api/v1/companylist"
        )
        .is_ok());
        assert!(validate_url("endpoints.directory", "").is_err());
        assert!(validate_url("endpoints.directory", "invalid-url").is_err());
        assert!(validate_url("endpoints.directory", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("api.key", "abc123").is_ok());
        assert!(validate_api_key("api.key", "   ").is_err());
        assert!(validate_api_key("api.key", "${TRACKER_API_KEY}").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("api.key", &present).unwrap(), "key");
        assert!(matches!(
            validate_required_field("api.key", &missing),
            Err(TrackerError::MissingConfigError { .. })
        ));
    }
}
