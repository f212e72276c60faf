use daily_core::{pick, SelectError, Selection};
use daily_logging::{daily_info, daily_warn};
use rand::Rng;
use thiserror::Error;

use crate::{CatalogSource, DeliveryError, FetchError, MemoryStore, Notifier, PersistError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("failed to record asked history: {0}")]
    Persist(#[from] PersistError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// What one successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub selection: Selection,
    /// Size of the history after this pick was recorded.
    pub day: usize,
    /// The history was exhausted and started over.
    pub reset: bool,
}

/// Wires catalog, history and notifier into one select-and-notify cycle.
pub struct DailyRunner<'a> {
    catalog: &'a dyn CatalogSource,
    store: &'a dyn MemoryStore,
    notifier: &'a dyn Notifier,
}

impl<'a> DailyRunner<'a> {
    pub fn new(
        catalog: &'a dyn CatalogSource,
        store: &'a dyn MemoryStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            catalog,
            store,
            notifier,
        }
    }

    /// History is saved before the notification goes out, so a failed
    /// delivery still consumes the pick. Any earlier failure leaves the
    /// stored history untouched.
    pub async fn run_once<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunReport, RunError> {
        let mut memory = self.store.load();
        let problems = self.catalog.fetch().await?;

        let picked = pick(&problems, &mut memory, rng)?;
        if picked.reset {
            daily_warn!("Every eligible problem has been asked; history reset");
        }

        memory.push(picked.selection.id);
        self.store.save(&memory)?;

        let day = memory.len();
        self.notifier.send(&picked.selection, day).await?;
        daily_info!(
            "Delivered problem #{} ({}) as day {}",
            picked.selection.id,
            picked.selection.title,
            day
        );

        Ok(RunReport {
            selection: picked.selection,
            day,
            reset: picked.reset,
        })
    }
}
