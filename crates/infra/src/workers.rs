//! Worker roster: register, edit, suspend and remove cleaning staff.

use thiserror::Error;
use tracing::{debug, info, instrument};

use cleanops_core::DomainError;
use cleanops_workforce::{
    WeeklyAvailability, Worker, WorkerDocument, WorkerId, WorkerPatch, WorkerProfile,
};

use crate::record_store::{RecordStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("worker {0} not found")]
    NotFound(WorkerId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct WorkerRoster<S> {
    store: S,
}

impl<S> WorkerRoster<S>
where
    S: RecordStore<WorkerId, WorkerDocument>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip_all, err)]
    pub async fn register(
        &self,
        profile: WorkerProfile,
        availability: WeeklyAvailability,
    ) -> Result<Worker, RosterError> {
        let doc = WorkerDocument::register(profile, availability)?;
        let id = self.store.create(doc.clone()).await?;
        info!(worker_id = %id, "worker registered");
        Ok(Worker::from_document(id, doc))
    }

    pub async fn list(&self) -> Result<Vec<Worker>, RosterError> {
        let records = self.store.list().await?;
        Ok(records
            .into_iter()
            .map(|(id, doc)| Worker::from_document(id, doc))
            .collect())
    }

    pub async fn get(&self, id: WorkerId) -> Result<Worker, RosterError> {
        self.store
            .get(&id)
            .await?
            .map(|doc| Worker::from_document(id, doc))
            .ok_or(RosterError::NotFound(id))
    }

    #[instrument(skip(self, patch), fields(worker_id = %id), err)]
    pub async fn update(&self, id: WorkerId, patch: WorkerPatch) -> Result<Worker, RosterError> {
        if patch.is_empty() {
            debug!("no changes to persist");
            return self.get(id).await;
        }
        let mut worker = self.get(id).await?;
        worker.update(patch)?;
        self.save(&worker).await?;
        info!("worker updated");
        Ok(worker)
    }

    #[instrument(skip(self), fields(worker_id = %id), err)]
    pub async fn toggle_status(&self, id: WorkerId) -> Result<Worker, RosterError> {
        let mut worker = self.get(id).await?;
        let status = worker.toggle_status();
        self.save(&worker).await?;
        info!(%status, "worker status toggled");
        Ok(worker)
    }

    #[instrument(skip(self), fields(worker_id = %id), err)]
    pub async fn delete(&self, id: WorkerId) -> Result<(), RosterError> {
        self.store.delete(&id).await.map_err(|e| match e {
            StoreError::NotFound => RosterError::NotFound(id),
            other => other.into(),
        })?;
        info!("worker deleted");
        Ok(())
    }

    async fn save(&self, worker: &Worker) -> Result<(), RosterError> {
        let id = worker.id_typed();
        self.store
            .update(&id, WorkerDocument::from(worker))
            .await
            .map_err(|e| match e {
                StoreError::NotFound => RosterError::NotFound(id),
                other => other.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_store::InMemoryRecordStore;
    use cleanops_core::{RecordId, Weekday};
    use cleanops_workforce::{DayAvailability, WorkerStatus};

    fn roster() -> WorkerRoster<InMemoryRecordStore<WorkerId, WorkerDocument>> {
        WorkerRoster::new(InMemoryRecordStore::new())
    }

    fn profile(name: &str) -> WorkerProfile {
        WorkerProfile {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "514-555-0100".into(),
            address: "1 Rue Principale".into(),
        }
    }

    #[tokio::test]
    async fn register_then_get() {
        let roster = roster();
        let worker = roster
            .register(profile("Nadia"), WeeklyAvailability::default())
            .await
            .unwrap();

        let loaded = roster.get(worker.id_typed()).await.unwrap();
        assert_eq!(loaded, worker);
        assert_eq!(loaded.status(), WorkerStatus::Active);
    }

    #[tokio::test]
    async fn invalid_profile_is_not_stored() {
        let roster = roster();
        let mut p = profile("Nadia");
        p.address.clear();
        let err = roster
            .register(p, WeeklyAvailability::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Domain(DomainError::Validation(_))));
        assert!(roster.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggle_and_update_are_persisted() {
        let roster = roster();
        let id = roster
            .register(profile("Omar"), WeeklyAvailability::default())
            .await
            .unwrap()
            .id_typed();

        roster.toggle_status(id).await.unwrap();
        roster
            .update(
                id,
                WorkerPatch {
                    availability: Some(
                        WeeklyAvailability::default().with(Weekday::Monday, DayAvailability::Off),
                    ),
                    ..WorkerPatch::default()
                },
            )
            .await
            .unwrap();

        let loaded = roster.get(id).await.unwrap();
        assert_eq!(loaded.status(), WorkerStatus::Suspended);
        assert!(loaded.availability().get(Weekday::Monday).is_off());
    }

    #[tokio::test]
    async fn empty_patch_returns_the_stored_worker() {
        let roster = roster();
        let worker = roster
            .register(profile("Lina"), WeeklyAvailability::default())
            .await
            .unwrap();

        let same = roster.update(worker.id_typed(), WorkerPatch::default()).await.unwrap();
        assert_eq!(same, worker);

        let ghost = WorkerId::new(RecordId::new());
        assert_eq!(
            roster.update(ghost, WorkerPatch::default()).await.unwrap_err(),
            RosterError::NotFound(ghost)
        );
    }

    #[tokio::test]
    async fn missing_worker_is_not_found() {
        let roster = roster();
        let id = WorkerId::new(RecordId::new());
        assert_eq!(roster.get(id).await.unwrap_err(), RosterError::NotFound(id));
        assert_eq!(roster.delete(id).await.unwrap_err(), RosterError::NotFound(id));
        assert_eq!(
            roster.toggle_status(id).await.unwrap_err(),
            RosterError::NotFound(id)
        );
    }
}
