use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod preflight;
mod server;

use error::ServeError;

fn main() -> ExitCode {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::init(&cfg) {
        eprintln!("[ERROR] Failed to open log files: {e}");
        return ExitCode::FAILURE;
    }

    // Multi-threaded runtime, sized by server.workers when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let result = runtime_builder
        .build()
        .map_err(ServeError::from)
        .and_then(|runtime| runtime.block_on(async_main(cfg)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ServeError::MissingFiles(missing)) => {
            logger::log_preflight_failed(&missing);
            ExitCode::FAILURE
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn async_main(cfg: config::Config) -> Result<(), ServeError> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(config::AppState::new(cfg)?);

    // Registered before preflight and bind so an early Ctrl+C still exits cleanly
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;

    logger::log_banner(addr.port(), &state.root);

    if state.config.preflight.enabled {
        preflight::check_required_files(&state.root, &state.config.preflight.required_files)
            .into_result()?;
    }

    let listener = server::create_listener(addr).map_err(|source| ServeError::Bind { addr, source })?;
    logger::log_server_ready(&addr, addr.port());

    server::start_server_loop(listener, state, shutdown).await;
    Ok(())
}
