use std::time::Duration;

use anyhow::bail;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;
use tracing::warn;

/// Which path produced the resolved date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// The remote timestamp parsed directly.
    Remote,
    /// The remote timestamp parsed after dropping its offset suffix.
    RemoteStripped,
    /// The remote service was unusable; the local clock answered.
    LocalClock,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedTime {
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub source: TimeSource,
}

#[derive(Deserialize)]
struct WorldTimeBody {
    datetime: String,
}

/// Client for the world-time service.
///
/// `now` always answers: any failure on the remote path (connect error,
/// timeout, bad status, undecodable body, unparsable timestamp) falls back
/// to the local system clock. The chosen path is reported in
/// [`ResolvedTime::source`].
pub struct TimeApi {
    client: reqwest::Client,
    url: String,
}

impl TimeApi {
    pub fn new(base_url: &str, timezone: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: format!("{}/{}", base_url.trim_end_matches('/'), timezone),
        }
    }

    pub async fn now(&self) -> ResolvedTime {
        match self.fetch_remote().await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(url = %self.url, error = %e, "World-time request failed, using local clock");
                local_now()
            }
        }
    }

    async fn fetch_remote(&self) -> anyhow::Result<ResolvedTime> {
        let body: WorldTimeBody = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match parse_datetime(&body.datetime) {
            Some(resolved) => Ok(resolved),
            None => bail!("unparsable datetime field: {:?}", body.datetime),
        }
    }
}

fn local_now() -> ResolvedTime {
    let now = Local::now();
    ResolvedTime {
        fecha: now.date_naive(),
        hora: whole_seconds(now.time()),
        source: TimeSource::LocalClock,
    }
}

/// Two-pass parse of the service's `datetime` field: first the full ISO 8601
/// string with offset, then a retry with everything from the first `+`
/// dropped. The offset itself is discarded either way; only the wall-clock
/// date and time survive.
fn parse_datetime(s: &str) -> Option<ResolvedTime> {
    if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() {
        return Some(ResolvedTime {
            fecha: dt.date_naive(),
            hora: whole_seconds(dt.time()),
            source: TimeSource::Remote,
        });
    }

    let head = s.split('+').next()?;
    let dt = head.parse::<NaiveDateTime>().ok()?;
    Some(ResolvedTime {
        fecha: dt.date(),
        hora: whole_seconds(dt.time()),
        source: TimeSource::RemoteStripped,
    })
}

fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}
