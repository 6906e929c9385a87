//! HTTP interface for the freefall simulator.
//!
//! The server provides:
//! - `POST /simulate` with a JSON [`RawInputs`] body, answering `200` with the
//!   [`SimulationResult`](freefall::SimulationResult) or `422` with an
//!   [`ErrorBody`] whose `message` is the validation message verbatim
//! - `GET /defaults` returning the standard starting inputs
//!
//! Simulations run on tokio's blocking pool and are bounded by
//! [`ServerConfig::max_steps`], so no single request can occupy a worker or
//! grow its trajectory without limit.
//!
//! # Example
//!
//! ```no_run
//! use freefall_server::{ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() {
//!     serve(ServerConfig::default()).await;
//! }
//! ```

use std::{
    convert::Infallible,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use freefall::{RawInputs, RunError, Simulation};
use serde::Serialize;
use tracing::{error, info};
use warp::{
    Filter, Rejection, Reply,
    http::StatusCode,
    reply::{Json, WithStatus},
};

/// Largest accepted request body, in bytes.
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Default for [`ServerConfig::max_steps`].
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Where the server listens and how much work one request may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,

    /// Most integration steps a single simulation may take.
    pub max_steps: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3030,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind.
    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Body of a rejected simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Wire name of the input field that failed, if one did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,

    /// Why the request was refused; validation messages pass through unchanged.
    pub message: String,
}

impl From<RunError> for ErrorBody {
    fn from(error: RunError) -> Self {
        let field = match error {
            RunError::Invalid(invalid) => Some(invalid.field()),
            RunError::TooManySteps { .. } => None,
        };
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// Builds the route tree served by [`serve`].
pub fn routes(
    config: &ServerConfig,
) -> impl Filter<Extract = (impl Reply + use<>,), Error = Rejection> + Clone + use<> {
    let max_steps = config.max_steps;

    let simulate = warp::path("simulate")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(move |raw: RawInputs| respond(raw, max_steps));

    let defaults = warp::path("defaults")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&RawInputs::standard()));

    simulate.or(defaults)
}

async fn respond(raw: RawInputs, max_steps: usize) -> Result<WithStatus<Json>, Infallible> {
    let outcome =
        tokio::task::spawn_blocking(move || Simulation::new().run_bounded(&raw, max_steps)).await;

    let reply = match outcome {
        Ok(Ok(result)) => warp::reply::with_status(warp::reply::json(&result), StatusCode::OK),
        Ok(Err(refused)) => warp::reply::with_status(
            warp::reply::json(&ErrorBody::from(refused)),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(join_error) => {
            error!(%join_error, "simulation task failed");
            let body = ErrorBody {
                field: None,
                message: "Internal server error.".to_owned(),
            };
            warp::reply::with_status(
                warp::reply::json(&body),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    };
    Ok(reply)
}

/// Serves [`routes`] until the process is stopped.
pub async fn serve(config: ServerConfig) {
    let address = config.address();
    info!(%address, max_steps = config.max_steps, "freefall server listening");

    warp::serve(routes(&config).with(warp::trace::request()))
        .run(address)
        .await;
}
