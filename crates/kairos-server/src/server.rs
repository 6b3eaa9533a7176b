//! The HTTP server: accept loop, per-connection service, lifecycle.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::Instrument;

use kairos_core::{Request, Response};

use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::shutdown::{ConnectionSet, ShutdownSignal};

/// Errors the server can exit with.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The configured address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The configured address.
        addr: String,
        /// The underlying I/O or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The Kairos HTTP server.
///
/// Owns a [`Dispatcher`] and serves it over HTTP/1.1 with one tokio task
/// per connection and graceful drain on shutdown.
///
/// # Example
///
/// ```rust,ignore
/// use kairos_server::{Dispatcher, Server, ServerConfig};
///
/// let server = Server::new(ServerConfig::default(), dispatcher);
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    dispatcher: Arc<Dispatcher>,
}

impl Server {
    /// Creates a server over a finished dispatcher.
    #[must_use]
    pub fn new(config: ServerConfig, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Runs until SIGTERM or SIGINT.
    pub async fn run(self) -> Result<(), ServerError> {
        let shutdown = ShutdownSignal::with_os_signals();
        self.run_with_shutdown(shutdown).await
    }

    /// Runs until the given signal triggers, then drains connections up to
    /// the configured shutdown timeout.
    pub async fn run_with_shutdown(self, shutdown: ShutdownSignal) -> Result<(), ServerError> {
        let addr = self.config.socket_addr().map_err(|e| ServerError::Bind {
            addr: self.config.http_addr().to_string(),
            source: Box::new(e),
        })?;

        let listener = TcpListener::bind(addr).await.map_err(|e| ServerError::Bind {
            addr: self.config.http_addr().to_string(),
            source: Box::new(e),
        })?;

        tracing::info!(%addr, "server listening");

        let server = Arc::new(self);
        let connections = ConnectionSet::new();

        loop {
            tokio::select! {
                result = listener.accept() => {
                    match result {
                        Ok((stream, remote_addr)) => {
                            let server = Arc::clone(&server);
                            let guard = connections.guard();
                            let shutdown = shutdown.clone();

                            tokio::spawn(async move {
                                let _guard = guard;
                                if let Err(e) = server.handle_connection(stream, remote_addr, shutdown).await {
                                    tracing::error!(%remote_addr, error = %e, "connection error");
                                }
                            });
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "failed to accept connection");
                        }
                    }
                }

                () = shutdown.recv() => {
                    tracing::info!("shutdown signal received");
                    break;
                }
            }
        }

        let shutdown_timeout = server.config.shutdown_timeout();
        tracing::info!(timeout = ?shutdown_timeout, "draining connections");

        if tokio::time::timeout(shutdown_timeout, connections.drained())
            .await
            .is_ok()
        {
            tracing::info!("all connections closed");
        } else {
            tracing::warn!("shutdown timeout reached with connections still open");
        }

        tracing::info!("server stopped");
        Ok(())
    }

    async fn handle_connection(
        self: &Arc<Self>,
        stream: tokio::net::TcpStream,
        remote_addr: SocketAddr,
        shutdown: ShutdownSignal,
    ) -> Result<(), hyper::Error> {
        let io = TokioIo::new(stream);
        let server = Arc::clone(self);

        let service = service_fn(move |req: http::Request<Incoming>| {
            let server = Arc::clone(&server);
            async move { server.handle_request(req).await }
        });

        let conn = http1::Builder::new().serve_connection(io, service);
        tokio::pin!(conn);

        tokio::select! {
            result = conn.as_mut() => result,
            () = shutdown.recv() => {
                // Stops taking new requests; the in-flight one finishes
                tracing::debug!(%remote_addr, "closing connection");
                conn.as_mut().graceful_shutdown();
                conn.await
            }
        }
    }

    async fn handle_request(
        self: &Arc<Self>,
        req: http::Request<Incoming>,
    ) -> Result<http::Response<Full<Bytes>>, Infallible> {
        let (parts, body) = req.into_parts();
        let path = parts.uri.path().to_string();

        let collected = tokio::time::timeout(self.config.request_timeout(), body.collect()).await;
        let body = match collected {
            Ok(Ok(collected)) => collected.to_bytes(),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "failed to read request body");
                return Ok(
                    Response::error("failed to read request body", StatusCode::BAD_REQUEST)
                        .into_http(),
                );
            }
            Err(_) => {
                tracing::warn!("request body read timed out");
                return Ok(Response::error(
                    "request body read timed out",
                    StatusCode::REQUEST_TIMEOUT,
                )
                .into_http());
            }
        };

        let request = Request::from_parts(parts.method, path, parts.headers, body);
        let request_id = request.id();
        let method = request.method().clone();
        let request_path = request.path().to_string();
        let span = tracing::debug_span!("request", %request_id, %method, path = %request_path);

        let dispatched = tokio::time::timeout(
            self.config.request_timeout(),
            self.dispatcher.dispatch(request).instrument(span),
        )
        .await;

        match dispatched {
            Ok(response) => Ok(response.into_http()),
            Err(_) => {
                tracing::error!(%request_id, %method, path = request_path, "dispatch timed out");
                Ok(Response::new("server error", StatusCode::INTERNAL_SERVER_ERROR).into_http())
            }
        }
    }
}
