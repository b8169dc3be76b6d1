use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::booking::interfaces::acl::availability_authority_facade::{
    AuthorityDecision, AuthorityFacadeError, AvailabilityAuthorityFacade, AvailabilityQuery,
};

pub struct HttpAvailabilityAuthorityFacadeImpl {
    base_url: String,
    check_timeout: Duration,
    probe_timeout: Duration,
    client: reqwest::Client,
}

impl HttpAvailabilityAuthorityFacadeImpl {
    pub fn new(base_url: String, check_timeout: Duration, probe_timeout: Duration) -> Self {
        Self {
            base_url,
            check_timeout,
            probe_timeout,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Serialize)]
struct CheckRequestPayload<'a> {
    room: &'a str,
    date: &'a str,
    time_start: &'a str,
    time_end: &'a str,
    #[serde(rename = "type")]
    booking_type: &'a str,
}

#[derive(Deserialize)]
struct CheckResponsePayload {
    available: bool,
    reason: Option<String>,
}

#[async_trait]
impl AvailabilityAuthorityFacade for HttpAvailabilityAuthorityFacadeImpl {
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AuthorityDecision, AuthorityFacadeError> {
        let payload = CheckRequestPayload {
            room: &query.room,
            date: &query.date,
            time_start: &query.time_start,
            time_end: &query.time_end,
            booking_type: &query.booking_type,
        };

        debug!(room = query.room.as_str(), date = query.date.as_str(), "querying authority");

        let response = self
            .client
            .post(self.endpoint("check"))
            .timeout(self.check_timeout)
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthorityFacadeError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decision: CheckResponsePayload = response
            .json()
            .await
            .map_err(|e| AuthorityFacadeError::InvalidResponse(e.to_string()))?;

        Ok(AuthorityDecision {
            available: decision.available,
            reason: decision.reason,
        })
    }

    async fn probe_health(&self) -> bool {
        match self
            .client
            .get(self.endpoint("health"))
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> AuthorityFacadeError {
    if error.is_timeout() {
        AuthorityFacadeError::Timeout
    } else if error.is_connect() {
        AuthorityFacadeError::Connection(error.to_string())
    } else {
        AuthorityFacadeError::InvalidResponse(error.to_string())
    }
}
