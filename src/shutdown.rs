// ABOUTME: Graceful shutdown trigger for the HTTP server
// ABOUTME: Resolves on Ctrl-C or SIGTERM; a listener that fails to install never fires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use std::io;
use tracing::{error, info};

/// Wait for Ctrl-C or SIGTERM
///
/// If one listener cannot be installed the other one still governs
/// shutdown; if neither can, the server runs until killed.
pub async fn wait_for_shutdown() {
    let ctrl_c = until_signal(tokio::signal::ctrl_c(), "ctrl_c");

    #[cfg(unix)]
    let terminate = until_signal(
        async {
            let mut signal =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
            signal.recv().await;
            Ok(())
        },
        "sigterm",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, initiating graceful shutdown");
}

/// Resolve when `listener` reports a delivered signal; park forever if it errors
async fn until_signal<F>(listener: F, signal: &'static str)
where
    F: Future<Output = io::Result<()>>,
{
    match listener.await {
        Ok(()) => info!(signal, "Received shutdown signal"),
        Err(e) => {
            error!(signal, error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
