//! Graceful shutdown coordination.
//!
//! [`ShutdownSignal`] fans a single trigger out to every task that waits on
//! it; [`ConnectionSet`] tracks live connections so shutdown can drain them
//! before the process exits.

use tokio::sync::{mpsc, watch};

/// A cloneable shutdown signal backed by a watch channel.
///
/// All clones observe the same trigger. Triggering is idempotent.
///
/// # Example
///
/// ```rust
/// use kairos_server::ShutdownSignal;
///
/// let shutdown = ShutdownSignal::new();
/// let observer = shutdown.clone();
///
/// shutdown.trigger();
/// assert!(observer.is_shutdown());
/// ```
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Creates an untriggered signal.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// Triggers the signal, waking every waiter. Safe to call repeatedly.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Returns `true` once the signal has been triggered.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves when the signal triggers; immediately if it already has.
    pub async fn recv(&self) {
        let mut rx = self.rx.clone();
        // Cannot error: `self` keeps a sender alive across the await
        let _ = rx.wait_for(|triggered| *triggered).await;
    }

    /// Creates a signal wired to SIGTERM and SIGINT.
    #[must_use]
    pub fn with_os_signals() -> Self {
        let signal = Self::new();
        let trigger = signal.clone();
        tokio::spawn(async move {
            if let Some(name) = wait_for_os_signal().await {
                tracing::info!(signal = name, "shutting down");
            }
            trigger.trigger();
        });
        signal
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

async fn wait_for_os_signal() -> Option<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => tokio::select! {
                _ = sigterm.recv() => Some("SIGTERM"),
                result = tokio::signal::ctrl_c() => result.ok().map(|()| "SIGINT"),
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not register the SIGTERM handler");
                tokio::signal::ctrl_c().await.ok().map(|()| "SIGINT")
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok().map(|()| "ctrl-c")
    }
}

/// Tracks live connections for the shutdown drain.
///
/// Each connection holds a [`ConnectionGuard`] for its lifetime;
/// [`ConnectionSet::drained`] consumes the set and resolves once every
/// guard has been dropped.
#[derive(Debug)]
pub struct ConnectionSet {
    guard_tx: mpsc::Sender<()>,
    guard_rx: mpsc::Receiver<()>,
}

impl ConnectionSet {
    /// Creates a set with no connections.
    #[must_use]
    pub fn new() -> Self {
        let (guard_tx, guard_rx) = mpsc::channel(1);
        Self { guard_tx, guard_rx }
    }

    /// Issues a guard; hold it for the connection's lifetime.
    #[must_use]
    pub fn guard(&self) -> ConnectionGuard {
        ConnectionGuard {
            _alive: self.guard_tx.clone(),
        }
    }

    /// Resolves once every issued guard has been dropped.
    ///
    /// Nothing is ever sent over the channel; the receiver returning `None`
    /// is exactly the moment the last guard goes away, so a guard dropped
    /// before this is first polled still counts.
    pub async fn drained(mut self) {
        drop(self.guard_tx);
        while self.guard_rx.recv().await.is_some() {}
    }
}

impl Default for ConnectionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps one connection counted in its [`ConnectionSet`].
#[derive(Debug, Clone)]
pub struct ConnectionGuard {
    _alive: mpsc::Sender<()>,
}
