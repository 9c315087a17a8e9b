//! HTTP API implementation using rouille.
//!
//! # Purpose
//!
//! Turns query-string requests into router calls and router outcomes into
//! JSON bodies. Holds no player state of its own; every request goes straight
//! through [`Router`] to the player client.
//!
//! # Key types
//!
//! - [`ApiServer`] - owns the router and readiness flag, builds the rouille handler
//! - [`ApiHandle`] - running server: bound address, `stop()`, `wait()`
//! - [`ApiResponse`] - the single JSON body shape
//!
//! # Response contract
//!
//! Status is always 200. Failure is signalled only by `"ok": false`, including
//! for wrong methods, unknown routes and missing parameters.
//!
//! # Used by
//!
//! - `server/mod.rs` - re-exports public types
//! - `bin/server.rs` - builds the server and blocks on it

use crate::client::PlayerClient;
use crate::core::{CtlError, LoadKind, Outcome, Reply, Router};
use anyhow::{Result, anyhow};
use log::{info, warn};
use rouille::{Request, Response};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::JoinHandle;

/// JSON body for every response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { ok: true, name: None, value: None, error: None }
    }

    pub fn property(name: &str, value: String) -> Self {
        Self { ok: true, name: Some(name.to_string()), value: Some(value), error: None }
    }

    pub fn err(msg: &str) -> Self {
        Self { ok: false, name: None, value: None, error: Some(msg.to_string()) }
    }
}

/// HTTP front end over a [`Router`].
pub struct ApiServer<C> {
    router: Arc<Router<C>>,
    ready: Arc<AtomicBool>,
}

impl<C: PlayerClient + 'static> ApiServer<C> {
    pub fn new(router: Router<C>) -> Self {
        Self {
            router: Arc::new(router),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Readiness flag; true while the server is accepting requests.
    pub fn ready_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.ready)
    }

    /// Handle one request. Exposed for tests and embedding.
    pub fn handle(&self, request: &Request) -> Response {
        Self::handle_request(request, &self.router, &self.ready)
    }

    /// Bind and serve on a background thread.
    pub fn spawn(self, addr: &str) -> Result<ApiHandle> {
        let router = Arc::clone(&self.router);
        let ready = Arc::clone(&self.ready);

        let server = rouille::Server::new(addr, move |request| {
            Self::handle_request(request, &router, &ready)
        })
        .map_err(|e| anyhow!("Could not listen on {}: {}", addr, e))?;

        let bound = server.server_addr();
        let (join, stop_tx) = server.stoppable();
        self.ready.store(true, Ordering::SeqCst);
        info!("Server is ready to handle requests at http://{}", bound);

        Ok(ApiHandle {
            addr: bound,
            ready: self.ready,
            stop_tx,
            join,
        })
    }

    /// Bind and serve until the process exits.
    pub fn run(self, addr: &str) -> Result<()> {
        self.spawn(addr)?.wait();
        Ok(())
    }

    fn handle_request(request: &Request, router: &Router<C>, ready: &AtomicBool) -> Response {
        info!("{} {}", request.method(), request.raw_url());

        if request.method() != "GET" {
            return Self::error("Method Not Allowed");
        }

        let outcome = match request.url().as_str() {
            "/append" => Self::load(request, router, LoadKind::SingleFile),
            "/playlist" => Self::load(request, router, LoadKind::Playlist),
            "/control" => param(request, "cmd").and_then(|cmd| router.control(&cmd)),
            "/set" => param(request, "name").and_then(|name| {
                let value = param(request, "value")?;
                router.set_property(&name, &value)
            }),
            "/get" => {
                return match param(request, "name").and_then(|name| {
                    router.get_property(&name).map(|reply| (name, reply))
                }) {
                    Ok((name, Reply::Value(value))) => {
                        Response::json(&ApiResponse::property(&name, value))
                    }
                    Ok((_, Reply::Done)) => Response::json(&ApiResponse::ok()),
                    Err(e) => Self::error(&e.to_string()),
                };
            }
            "/health" => {
                if ready.load(Ordering::SeqCst) {
                    Ok(Reply::Done)
                } else {
                    return Self::error("Service Unavailable");
                }
            }
            _ => return Self::error("Not Found"),
        };

        Self::render(outcome)
    }

    fn load(request: &Request, router: &Router<C>, kind: LoadKind) -> Outcome {
        let url = param(request, "url")?;
        let flag = query_param(request, "flag");
        router.load(&url, kind, flag.as_deref())
    }

    fn render(outcome: Outcome) -> Response {
        match outcome {
            Ok(Reply::Done) => Response::json(&ApiResponse::ok()),
            // Only /get produces values and it renders its own name
            Ok(Reply::Value(value)) => Response::json(&ApiResponse {
                value: Some(value),
                ..ApiResponse::ok()
            }),
            Err(e) => Self::error(&e.to_string()),
        }
    }

    fn error(msg: &str) -> Response {
        warn!("{}", msg);
        Response::json(&ApiResponse::err(msg))
    }
}

/// Required query parameter.
fn param(request: &Request, name: &str) -> Result<String, CtlError> {
    query_param(request, name).ok_or_else(|| CtlError::MissingParameter(name.to_string()))
}

/// First value of `name`, split on the first `=` only and percent/`+` decoded.
///
/// `Request::get_param` stops at the next `=`, which truncates bare URLs like
/// `?url=https://host/watch?v=id`.
fn query_param(request: &Request, name: &str) -> Option<String> {
    url::form_urlencoded::parse(request.raw_query_string().as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// A running server.
pub struct ApiHandle {
    addr: SocketAddr,
    ready: Arc<AtomicBool>,
    stop_tx: mpsc::Sender<()>,
    join: JoinHandle<()>,
}

impl ApiHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting requests and wait for the server thread.
    pub fn stop(self) {
        info!("Server is shutting down...");
        self.ready.store(false, Ordering::SeqCst);
        let _ = self.stop_tx.send(());
        let _ = self.join.join();
        info!("Server stopped");
    }

    /// Block until the server thread exits.
    pub fn wait(self) {
        let _ = self.join.join();
        self.ready.store(false, Ordering::SeqCst);
    }
}
