use crate::domain::model::{Carrier, CompanyList};
use crate::domain::ports::{CarrierDirectory, ConfigProvider, TrackingService};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_api_key, validate_url};
use async_trait::async_trait;
use reqwest::Client;

/// reqwest client for the Sweet Tracker API; serves both the carrier
/// directory and the tracking info endpoints.
#[derive(Debug, Clone)]
pub struct SweetTrackerClient {
    client: Client,
    api_key: String,
    directory_endpoint: String,
    tracking_endpoint: String,
}

impl SweetTrackerClient {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_api_key("api.key", config.api_key())?;
        validate_url("endpoints.directory", config.directory_endpoint())?;
        validate_url("endpoints.tracking", config.tracking_endpoint())?;

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key().to_string(),
            directory_endpoint: config.directory_endpoint().to_string(),
            tracking_endpoint: config.tracking_endpoint().to_string(),
        })
    }

    async fn get_body(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        // 不記錄 t_key；reqwest 錯誤會帶完整 URL，先去掉
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .query(query)
            .send()
            .await
            .map_err(|e| TrackerError::from(e.without_url()))?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TrackerError::HttpStatusError {
                status: response.status().as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| TrackerError::from(e.without_url()))
    }
}

#[async_trait]
impl CarrierDirectory for SweetTrackerClient {
    async fn fetch_carriers(&self) -> Result<Vec<Carrier>> {
        let body = self
            .get_body(&self.directory_endpoint, &[("t_key", self.api_key.as_str())])
            .await?;

        let list: CompanyList =
            serde_json::from_str(&body).map_err(|e| TrackerError::MalformedResponseError {
                endpoint: self.directory_endpoint.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Carrier directory returned {} entries", list.company.len());
        Ok(list.company)
    }
}

#[async_trait]
impl TrackingService for SweetTrackerClient {
    async fn tracking_info(&self, carrier_code: &str, invoice: &str) -> Result<serde_json::Value> {
        let body = self
            .get_body(
                &self.tracking_endpoint,
                &[
                    ("t_code", carrier_code),
                    ("t_invoice", invoice),
                    ("t_key", self.api_key.as_str()),
                ],
            )
            .await?;

        serde_json::from_str(&body).map_err(|e| TrackerError::MalformedResponseError {
            endpoint: self.tracking_endpoint.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_key: String,
        directory_endpoint: String,
        tracking_endpoint: String,
    }

    impl MockConfig {
        fn new(server: &MockServer) -> Self {
            Self {
                api_key: "test-key".to_string(),
                directory_endpoint: server.url("/api/v1/companylist"),
                tracking_endpoint: server.url("/api/v1/trackingInfo"),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_key(&self) -> &str {
            &self.api_key
        }

        fn directory_endpoint(&self) -> &str {
            &self.directory_endpoint
        }

        fn tracking_endpoint(&self) -> &str {
            &self.tracking_endpoint
        }
    }

    #[tokio::test]
    async fn test_fetch_carriers_sends_key_and_parses_company() {
        let server = MockServer::start();
        let directory_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/companylist")
                .query_param("t_key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "Company": [
                        {"International": "false", "Code": "04", "Name": "CJ대한통운"},
                        {"International": "true", "Code": "12", "Name": "EMS"}
                    ]
                }));
        });

        let client = SweetTrackerClient::from_config(&MockConfig::new(&server)).unwrap();
        let carriers = client.fetch_carriers().await.unwrap();

        directory_mock.assert();
        assert_eq!(carriers.len(), 2);
        assert_eq!(carriers[0], Carrier::new(false, "04", "CJ대한통운"));
        assert!(carriers[1].international);
    }

    #[tokio::test]
    async fn test_fetch_carriers_missing_company_field_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/companylist");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": false, "msg": "invalid key"}));
        });

        let client = SweetTrackerClient::from_config(&MockConfig::new(&server)).unwrap();
        let err = client.fetch_carriers().await.unwrap_err();

        assert!(matches!(err, TrackerError::MalformedResponseError { .. }));
    }

    #[tokio::test]
    async fn test_fetch_carriers_server_error_is_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/companylist");
            then.status(500);
        });

        let client = SweetTrackerClient::from_config(&MockConfig::new(&server)).unwrap();
        let err = client.fetch_carriers().await.unwrap_err();

        assert!(matches!(err, TrackerError::HttpStatusError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_tracking_info_sends_three_query_params() {
        let server = MockServer::start();
        let tracking_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/trackingInfo")
                .query_param("t_code", "04")
                .query_param("t_invoice", "123456789012")
                .query_param("t_key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"invoiceNo": "123456789012", "level": 6}));
        });

        let client = SweetTrackerClient::from_config(&MockConfig::new(&server)).unwrap();
        let info = client.tracking_info("04", "123456789012").await.unwrap();

        tracking_mock.assert();
        assert_eq!(info["level"], 6);
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        let config = MockConfig {
            api_key: "secret-key-123".to_string(),
            directory_endpoint: "http://127.0.0.1:9/companylist".to_string(),
            tracking_endpoint: "http://127.0.0.1:9/trackingInfo".to_string(),
        };
        let client = SweetTrackerClient::from_config(&config).unwrap();

        let err = client.fetch_carriers().await.unwrap_err();
        assert!(matches!(err, TrackerError::ApiError(_)));
        assert!(!err.to_string().contains("secret-key-123"));
        assert!(!format!("{:?}", err).contains("secret-key-123"));

        let err = client.tracking_info("04", "123").await.unwrap_err();
        assert!(!err.to_string().contains("secret-key-123"));
        assert!(!err.user_friendly_message().contains("secret-key-123"));
    }

    #[test]
    fn test_from_config_rejects_bad_endpoint() {
        let config = MockConfig {
            api_key: "test-key".to_string(),
            directory_endpoint: "not a url".to_string(),
            tracking_endpoint: "http://localhost/trackingInfo".to_string(),
        };
        assert!(SweetTrackerClient::from_config(&config).is_err());
    }
}
