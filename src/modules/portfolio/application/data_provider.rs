use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::modules::portfolio::application::ports::outgoing::PortfolioSource;
use crate::modules::portfolio::domain::entities::PortfolioData;

/// The only message a visitor ever sees for a failed load. The cause is logged.
pub const DATA_LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio data";

/// Exactly one of these is active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(Arc<PortfolioData>),
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&Arc<PortfolioData>> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Supplies `PortfolioData` through a one-shot `Loading -> Ready | Failed`
/// cycle per `load()`.
///
/// The fetch runs on its own task and cannot be aborted. The task only holds
/// weak handles, so once the provider is dropped a late result is discarded.
/// Calling `load()` again starts a new cycle; results of older cycles are
/// ignored.
pub struct DataProvider {
    source: Arc<dyn PortfolioSource>,
    state: Arc<watch::Sender<LoadState>>,
    cycle: Arc<AtomicU64>,
}

impl DataProvider {
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            source,
            state: Arc::new(state),
            cycle: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn current(&self) -> LoadState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Starts a load cycle. `Loading` is published before this returns; the
    /// terminal state follows when the fetch completes. Must be called from
    /// within a tokio runtime.
    pub fn load(&self) -> JoinHandle<()> {
        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadState::Loading);

        let source = Arc::clone(&self.source);
        let state = Arc::downgrade(&self.state);
        let cycles = Arc::downgrade(&self.cycle);

        info!(cycle, source = %source.describe(), "Loading portfolio data");

        tokio::spawn(async move {
            let outcome = source.fetch().await;

            let (Some(state), Some(cycles)) = (state.upgrade(), cycles.upgrade()) else {
                debug!(cycle, "Provider dropped before fetch completed, discarding result");
                return;
            };

            let next = match outcome {
                Ok(data) => {
                    info!(
                        cycle,
                        projects = data.projects.len(),
                        education = data.education.len(),
                        "Portfolio data ready"
                    );
                    LoadState::Ready(Arc::new(data))
                }
                Err(err) => {
                    error!(cycle, error = %err, "Failed to load portfolio data");
                    LoadState::Failed(DATA_LOAD_FAILED_MESSAGE.to_string())
                }
            };

            // The cycle check runs under the channel's write lock so a
            // concurrent `load()` can't be overwritten by a stale result.
            let applied = state.send_if_modified(|current| {
                if cycles.load(Ordering::SeqCst) != cycle {
                    return false;
                }
                *current = next;
                true
            });

            if !applied {
                debug!(cycle, "Load cycle superseded, discarding result");
            }
        })
    }

    /// Waits until the current cycle reaches `Ready` or `Failed`. Never
    /// resolves if `load()` was not called.
    pub async fn settled(&self) -> LoadState {
        let mut receiver = self.subscribe();
        if let Ok(state) = receiver.wait_for(LoadState::is_settled).await {
            return state.clone();
        }
        self.current()
    }
}
