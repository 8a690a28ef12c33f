use crate::domain::model::Carrier;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn directory_endpoint(&self) -> &str;
    fn tracking_endpoint(&self) -> &str;
}

/// External carrier directory (collaborator A).
#[async_trait]
pub trait CarrierDirectory: Send + Sync {
    async fn fetch_carriers(&self) -> Result<Vec<Carrier>>;
}

/// External tracking info lookup (collaborator B). The response shape is
/// not interpreted.
#[async_trait]
pub trait TrackingService: Send + Sync {
    async fn tracking_info(&self, carrier_code: &str, invoice: &str) -> Result<serde_json::Value>;
}
