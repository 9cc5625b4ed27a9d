use std::error::Error as _;
use std::io;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::config::ProbeConfig;
use crate::domain::entities::endpoint::Endpoint;
use crate::domain::entities::probe::ProbeOutcome;
use crate::domain::ports::prober::{ProbeError, Prober};

/// Probes endpoints with a single HTTP GET.
///
/// A 200 response is up, any other status is down, and a failure to connect
/// (DNS, refused, timeout, connection dropped before a response) is down
/// without a status code. Every other request error is returned as
/// [`ProbeError::Transport`].
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Creates a prober. `timeout` bounds the whole request; `None` waits
    /// for as long as the server holds the connection.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::ClientInit` if the HTTP client cannot be
    /// initialized (e.g. TLS backend failure).
    pub fn new(
        timeout: Option<Duration>,
        user_agent: &str,
        use_system_proxy: bool,
    ) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if !use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ProbeError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Returns `ProbeError::ClientInit` if the HTTP client cannot be initialized.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ProbeError> {
        Self::new(config.timeout(), &config.user_agent, config.use_system_proxy)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, endpoint: &Endpoint) -> Result<ProbeOutcome, ProbeError> {
        let started = Instant::now();
        let result = self.client.get(endpoint.as_str()).send().await;
        let elapsed = started.elapsed();

        match result {
            Ok(response) => {
                let status = response.status();
                Ok(ProbeOutcome::from_status(
                    endpoint.clone(),
                    status.as_u16(),
                    elapsed.as_secs_f64(),
                ))
            }
            Err(e) if e.is_connect() || e.is_timeout() || is_connection_lost(&e) => {
                tracing::debug!("connection to {endpoint} failed: {e}");
                Ok(ProbeOutcome::unreachable(endpoint.clone()))
            }
            Err(e) => Err(ProbeError::Transport {
                url: endpoint.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// True when the request went out but the peer closed, reset or aborted the
/// connection before a response arrived.
fn is_connection_lost(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if cause
            .downcast_ref::<hyper::Error>()
            .is_some_and(hyper::Error::is_incomplete_message)
        {
            return true;
        }
        if cause.downcast_ref::<io::Error>().is_some_and(|e| {
            matches!(
                e.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            )
        }) {
            return true;
        }
        source = cause.source();
    }
    false
}
