use anyhow::{bail, Result};
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use nix::libc;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::metrics;
use crate::pricing::PricingCalculator;

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Pricing policy reload from `config_path`
#[cfg(unix)]
pub fn setup_signal_handlers(
    calculator: Arc<ArcSwap<PricingCalculator>>,
    config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        let (mut sigterm, mut sigint, mut sighup) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            (term, int, hup) => {
                let err = [term.err(), int.err(), hup.err()].into_iter().flatten().next();
                error!("Failed to install signal handlers: {:?}", err);
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading pricing policy");
                    match reload_calculator(&calculator, &config_path) {
                        Ok(()) => info!("Pricing policy reloaded successfully"),
                        Err(e) => error!("Failed to reload pricing policy: {}", e),
                    }
                }
            }
        }
    });

    (shutdown_tx, handle)
}

/// Windows placeholder - signals not fully supported
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _calculator: Arc<ArcSwap<PricingCalculator>>,
    _config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        // On Windows, only Ctrl+C is supported
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    (shutdown_tx, handle)
}

/// Load, validate and swap in a new calculator.
///
/// On any failure the running calculator stays in place. Requests already
/// holding the old one finish with it.
pub fn reload_calculator(
    calculator: &ArcSwap<PricingCalculator>,
    config_path: &Path,
) -> Result<()> {
    let result = crate::config::load_config(config_path).and_then(|cfg| {
        info!(
            "New pricing policy loaded. Tax rate: {}, free delivery from {}, {} zone overrides",
            cfg.pricing.tax_rate,
            cfg.pricing.free_delivery_threshold,
            cfg.regions.zone_overrides.len()
        );
        cfg.build_calculator()
    });

    metrics::record_reload(result.is_ok());
    calculator.store(Arc::new(result?));
    Ok(())
}

/// Send a signal to a process by PID (for the reload command)
#[cfg(unix)]
pub fn send_signal_to_pid(pid: u32, signal_kind: SignalKind) -> Result<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let nix_signal = match signal_kind.as_raw_value() {
        libc::SIGTERM => Signal::SIGTERM,
        libc::SIGHUP => Signal::SIGHUP,
        libc::SIGINT => Signal::SIGINT,
        libc::SIGCONT => Signal::SIGCONT,
        _ => bail!("Unsupported signal: {:?}", signal_kind),
    };

    let raw_pid = i32::try_from(pid)?;
    info!("Sending signal {:?} to PID {}", nix_signal, pid);

    kill(Pid::from_raw(raw_pid), nix_signal)
        .map_err(|e| anyhow::anyhow!("Failed to send signal to PID {}: {}", pid, e))?;

    Ok(())
}

/// Windows placeholder
#[cfg(not(unix))]
pub fn send_signal_to_pid(_pid: u32, _signal_kind: ()) -> Result<()> {
    bail!("Signal sending not supported on this platform");
}
