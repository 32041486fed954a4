use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use warp::http::StatusCode;
use warp::Filter;

use connect4::agents::{Agent, MinimaxAgent};
use connect4::env::{IndexResponse, MoveRequest, MoveResponse, API_VERSION};
use connect4::logging;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime server configuration.
struct State {
    config: Agent,
}

#[derive(Debug, Parser)]
#[command(version, about = "Computer opponent for connect four as a web service.")]
struct Opt {
    /// IP and Port of the webserver.
    ///
    /// **Note**: Use the IP Address of your device if you want to access it
    /// from another device. (`127.0.0.1` or `localhost` is private to your
    /// computer)
    #[arg(long, default_value = "127.0.0.1:5002")]
    host: SocketAddr,
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt { host, config } = Opt::parse();
    info!("agent {}", config);

    let state = Arc::new(State { config });

    let index = warp::get()
        .and(warp::path::end())
        .and(with_state(state.clone()))
        .map(|state: Arc<State>| {
            info!("index");
            warp::reply::json(&IndexResponse::new(
                API_VERSION.into(),
                PACKAGE_VERSION.into(),
                state.config.to_string(),
            ))
        });

    let r#move = warp::path("move")
        .and(with_state(state))
        .and(warp::post())
        .and(warp::body::json::<MoveRequest>())
        .and_then(step);

    warp::serve(index.or(r#move)).run(host).await
}

fn with_state(
    state: Arc<State>,
) -> impl Filter<Extract = (Arc<State>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

async fn step(state: Arc<State>, request: MoveRequest) -> Result<impl warp::Reply, Infallible> {
    let agent = match (request.difficulty, &state.config) {
        (Some(difficulty), Agent::Minimax(config)) => Agent::Minimax(MinimaxAgent {
            depth: difficulty.depth(),
            ..config.clone()
        }),
        (Some(difficulty), Agent::Random(_)) => Agent::from(difficulty),
        (None, config) => config.clone(),
    };
    warn!("move {:?} {}", request.difficulty, request.board);

    let timer = Instant::now();
    let board = request.board;
    // the search blocks for its whole duration
    match tokio::task::spawn_blocking(move || agent.step(&board)).await {
        Ok(result) => {
            info!("response time {:?}ms {:?}", timer.elapsed().as_millis(), result);
            Ok(warp::reply::with_status(
                warp::reply::json(&MoveResponse::from(result)),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            error!("search failed: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&MoveResponse {
                    column: None,
                    score: 0,
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
