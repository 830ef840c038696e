use crate::domain::model::Fetched;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn device_url(&self) -> &str;
    fn mbar_divisor(&self) -> f64;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// 讀取裝置狀態檔的來源
#[async_trait]
pub trait StatusSource: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn fetch(&self) -> Result<Fetched>;
}
