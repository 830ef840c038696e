use crate::core::extract::Extractor;
use crate::domain::model::Report;
use crate::domain::ports::StatusSource;
use crate::utils::error::Result;
use url::Url;

pub struct Probe<S: StatusSource> {
    source: S,
    extractor: Extractor,
    mbar_divisor: f64,
}

impl<S: StatusSource> Probe<S> {
    pub fn new(source: S, mbar_divisor: f64) -> Result<Self> {
        Ok(Self {
            source,
            extractor: Extractor::new()?,
            mbar_divisor,
        })
    }

    /// 單次讀取：GET 一次，狀態碼 200 才解析內容
    pub async fn run(&self) -> Result<Report> {
        let resource = resource_name(self.source.endpoint());
        tracing::info!("📡 Fetching {}", self.source.endpoint());

        let fetched = self.source.fetch().await?;
        tracing::debug!(
            "Response status {} ({} bytes)",
            fetched.status,
            fetched.body.len()
        );

        if fetched.status != 200 {
            tracing::warn!("❌ {} returned status {}", resource, fetched.status);
            return Ok(Report::FetchFailed {
                resource,
                status: fetched.status,
            });
        }

        let reading = self.extractor.read(&fetched.body, self.mbar_divisor);
        Ok(Report::Readings { resource, reading })
    }
}

/// URL 路徑的最後一段，例如 `mfc.js`；路徑為空時回傳整個 URL
pub fn resource_name(endpoint: &str) -> String {
    Url::parse(endpoint)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| endpoint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Fetched, FieldReading};
    use async_trait::async_trait;

    struct FixedSource {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl StatusSource for FixedSource {
        fn endpoint(&self) -> &str {
            "http://192.168.2.155/mfc.js"
        }

        async fn fetch(&self) -> Result<Fetched> {
            Ok(Fetched {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name("http://192.168.2.155/mfc.js"), "mfc.js");
        assert_eq!(resource_name("http://mfc.local/status/mfc.js?x=1"), "mfc.js");
        assert_eq!(resource_name("http://mfc.local/"), "http://mfc.local/");
        assert_eq!(resource_name("not a url"), "not a url");
    }

    #[test]
    fn test_run_reads_body_on_200() {
        let probe = Probe::new(
            FixedSource {
                status: 200,
                body: "mfc.flow_value = 12.5;\nmfc.pressure_value = 1.333;",
            },
            1.333,
        )
        .unwrap();

        let report = tokio_test::block_on(probe.run()).unwrap();
        match report {
            Report::Readings { resource, reading } => {
                assert_eq!(resource, "mfc.js");
                assert_eq!(reading.flow, FieldReading::Found(12.5));
                assert_eq!(reading.pressure_mbar(), Some(1.0));
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_run_skips_body_on_non_200() {
        let probe = Probe::new(
            FixedSource {
                status: 503,
                body: "mfc.flow_value = 12.5;",
            },
            1.333,
        )
        .unwrap();

        let report = tokio_test::block_on(probe.run()).unwrap();
        assert_eq!(
            report,
            Report::FetchFailed {
                resource: "mfc.js".to_string(),
                status: 503
            }
        );
    }

    #[test]
    fn test_other_success_codes_are_failures() {
        let probe = Probe::new(FixedSource { status: 204, body: "" }, 1.333).unwrap();
        let report = tokio_test::block_on(probe.run()).unwrap();
        assert!(matches!(report, Report::FetchFailed { status: 204, .. }));
    }
}
