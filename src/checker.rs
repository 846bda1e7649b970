use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    core::{
        check_result::{classify, CheckError, CheckResult},
        credential::Credential,
        util::{bearer_request, AsyncHttpClient},
    },
};

/// Result of checking one credential, keyed by its display prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub credential: String,
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Checks credentials against a single endpoint, one request each.
#[derive(Debug)]
pub struct Checker<H> {
    config: Config,
    http_client: H,
}

impl<H> Checker<H>
where
    H: AsyncHttpClient + Send + Sync,
{
    pub fn new(config: Config, http_client: H) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn http_client(&self) -> &H {
        &self.http_client
    }

    /// Checks a single credential. Failures are folded into
    /// [`CheckResult::Errored`].
    pub async fn check(&self, credential: &Credential) -> CheckResult {
        match self.try_check(credential).await {
            Ok(result) => result,
            Err(e) => {
                warn!(credential = credential.prefix(), "check failed: {e}");
                e.into()
            }
        }
    }

    /// The request is bounded by `config.timeout` here, whatever the client.
    async fn try_check(&self, credential: &Credential) -> Result<CheckResult, CheckError> {
        let request = bearer_request(&self.config.endpoint, credential)?;

        debug!(
            credential = credential.prefix(),
            endpoint = %self.config.endpoint,
            "sending check request"
        );

        let response =
            tokio::time::timeout(self.config.timeout, self.http_client.execute(request))
                .await
                .map_err(|_| CheckError::Timeout(self.config.timeout))?
                .map_err(CheckError::Transport)?;

        let status = response.status();
        debug!(credential = credential.prefix(), %status, "received response");

        Ok(classify(status, response.body()))
    }

    /// Checks every credential in order, one at a time. `on_result` runs
    /// after each check so callers can report progressively.
    pub async fn check_all<F>(&self, credentials: &[Credential], mut on_result: F) -> Vec<Report>
    where
        F: FnMut(&Report),
    {
        info!(count = credentials.len(), "checking credentials");

        let mut reports = Vec::with_capacity(credentials.len());
        for credential in credentials {
            let report = Report {
                credential: credential.prefix().to_string(),
                result: self.check(credential).await,
            };
            on_result(&report);
            reports.push(report);
        }

        let valid = reports.iter().filter(|r| r.result.is_valid()).count();
        info!(valid, total = reports.len(), "finished checking credentials");

        reports
    }
}
