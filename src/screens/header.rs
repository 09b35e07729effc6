use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::profile::services::load_header;
use crate::profile::HeaderInfo;
use crate::storage::KeyValueStore;

pub const LOGO_ASSET: &str = "assets/Little-Lemon-Images/Logo.png";

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Keeps the header avatar/initials in sync with the key-value store by
/// re-reading it on a fixed interval. Polling stops when the watcher is dropped.
pub struct HeaderWatcher {
    rx: watch::Receiver<HeaderInfo>,
    task: JoinHandle<()>,
}

impl HeaderWatcher {
    pub async fn start(kv: Arc<dyn KeyValueStore>, interval: Duration) -> Self {
        let initial = load_header(kv.as_ref()).await.unwrap_or_else(|e| {
            warn!(error = %e, "error reading header info");
            HeaderInfo::default()
        });
        let (tx, rx) = watch::channel(initial);

        let interval = interval.max(MIN_POLL_INTERVAL);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial value is already loaded.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                match load_header(kv.as_ref()).await {
                    Ok(latest) => {
                        tx.send_if_modified(|current| {
                            if *current == latest {
                                return false;
                            }
                            *current = latest;
                            true
                        });
                    }
                    Err(e) => warn!(error = %e, "error polling header info"),
                }
            }
        });

        Self { rx, task }
    }

    pub fn current(&self) -> HeaderInfo {
        self.rx.borrow().clone()
    }

    pub async fn changed(&mut self) -> Option<HeaderInfo> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl Drop for HeaderWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
