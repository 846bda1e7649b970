//! Checks whether API bearer tokens are accepted by a remote endpoint.
//!
//! Each credential is probed with a single `GET` request carrying an
//! `Authorization: Bearer <token>` header and classified from the response:
//!
//! - `200 OK` is [`CheckResult::Valid`];
//! - any other status is [`CheckResult::Invalid`], with the status code and
//!   the `error.message` of the JSON body (or `"Unknown error"`);
//! - a request that produces no response, including one exceeding the
//!   timeout, is [`CheckResult::Errored`].
//!
//! Credentials are checked sequentially, in the order given, and a failure
//! for one credential never affects the others. Nothing is retried.
//!
//! ```ignore
//! use keycheck::{checker::Checker, config::Config, core::util::ReqwestClient};
//!
//! let checker = Checker::new(Config::default(), ReqwestClient::new()?);
//! let reports = checker
//!     .check_all(&credentials, |report| println!("{}", output::render_line(report)))
//!     .await;
//! ```
//!
//! The HTTP transport can be replaced by implementing [`AsyncHttpClient`].
//!
//! [`CheckResult::Valid`]: crate::core::check_result::CheckResult::Valid
//! [`CheckResult::Invalid`]: crate::core::check_result::CheckResult::Invalid
//! [`CheckResult::Errored`]: crate::core::check_result::CheckResult::Errored
//! [`AsyncHttpClient`]: crate::core::util::AsyncHttpClient

pub mod checker;
pub mod config;
pub mod core;
pub mod output;
