use anyhow::{Context, Result};
use async_trait::async_trait;
use http::{header::AUTHORIZATION, Method, Request, Response};
use url::Url;

use crate::core::credential::Credential;

/// Generic HTTP client.
///
/// A trait is used here so the checker can be driven by an in-memory client
/// in tests and by [`ReqwestClient`] in the binary.
#[async_trait]
pub trait AsyncHttpClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>>;
}

/// Builds the read-only probe request sent for a single credential.
pub(crate) fn bearer_request(
    endpoint: &Url,
    credential: &Credential,
) -> http::Result<Request<Vec<u8>>> {
    Request::builder()
        .method(Method::GET)
        .uri(endpoint.as_str())
        .header(AUTHORIZATION, format!("Bearer {}", credential.expose()))
        .body(Vec::new())
}

#[derive(Debug)]
pub struct ReqwestClient(reqwest::Client);

impl ReqwestClient {
    /// No client-side timeout is set; [`Checker`](crate::checker::Checker)
    /// bounds each request.
    pub fn new() -> Result<Self> {
        reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .context("unable to build http_client")
            .map(Self)
    }
}

#[async_trait]
impl AsyncHttpClient for ReqwestClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        let response = self
            .0
            .execute(request.try_into().context("unable to convert request")?)
            .await
            .context("http request failed")?;

        let mut builder = Response::builder()
            .status(response.status())
            .version(response.version());

        builder
            .headers_mut()
            .context("unable to set headers")?
            .extend(response.headers().clone());

        builder
            .body(
                response
                    .bytes()
                    .await
                    .context("failed to extract response body")?
                    .to_vec(),
            )
            .context("unable to construct response")
    }
}
