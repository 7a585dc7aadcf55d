use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::router::handle;
use crate::state::AppState;
use astra::{ConnectionInfo, Request, Server};

mod clock;
mod config;
mod copywriter;
mod db;
mod domain;
mod errors;
mod handlers;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_tracing();

    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr.clone();
    let max_workers = config.max_workers;

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_db(&state.db, &state.config.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    tracing::info!(
        %addr,
        tz = %state.tz,
        copywriter = state.copywriter.is_some(),
        "starting server"
    );

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req: Request, _info: ConnectionInfo| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        match handle(req, &state) {
            Ok(resp) => {
                tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
                resp
            }
            Err(err) => {
                let status = err.status();
                if status >= 500 {
                    tracing::error!(%method, %path, status, error = %err, "request failed");
                } else {
                    tracing::warn!(%method, %path, status, error = %err, "request rejected");
                }
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
