use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use procurehub_core::RequestId;

use crate::request::{ProcurementRequestCreate, ProcurementRequestStored, RequestStatus};

/// Storage-layer failure.
///
/// The volatile store has exactly one failure mode: a poisoned lock from a
/// panicking writer. Every other outcome, including missing ids, is a
/// regular result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository lock poisoned")]
    LockPoisoned,
}

/// Exclusive owner of stored procurement requests.
///
/// The only component that assigns identifiers and timestamps or mutates
/// stored status. Swap point for durable storage: the intake service
/// contract does not change with the backing implementation.
pub trait RequestRepository {
    /// Wrap the request with a fresh id, creation time, and `open` status,
    /// insert it, and return the stored record. Never fails for well-formed
    /// input; storage growth is unbounded by design.
    fn store(
        &self,
        request: ProcurementRequestCreate,
    ) -> Result<ProcurementRequestStored, RepositoryError>;

    /// All stored records, in insertion order (deterministic listing).
    fn get_all(&self) -> Result<Vec<ProcurementRequestStored>, RepositoryError>;

    /// The record with the given id, or `None`. Missing ids are an expected,
    /// frequent case and never an error.
    fn get_by_id(
        &self,
        id: RequestId,
    ) -> Result<Option<ProcurementRequestStored>, RepositoryError>;

    /// Set the stored record's status in place and return the updated
    /// snapshot, or `None` without side effect when the id is unknown.
    fn update_status(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> Result<Option<ProcurementRequestStored>, RepositoryError>;

    /// Empty the collection. Test isolation only; not part of the external
    /// contract.
    fn clear(&self) -> Result<(), RepositoryError>;
}

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<RequestId, ProcurementRequestStored>,
    // Insertion order of ids; `by_id` alone cannot provide a deterministic
    // listing.
    order: Vec<RequestId>,
}

/// In-memory request repository.
///
/// Volatile by contract: durability across restarts is out of scope. A
/// single lock guards the map and the insertion-order index so each
/// operation stays atomic under parallel callers.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: RwLock<Inner>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestRepository for InMemoryRepository {
    fn store(
        &self,
        request: ProcurementRequestCreate,
    ) -> Result<ProcurementRequestStored, RepositoryError> {
        let stored = ProcurementRequestStored::new(request);

        let mut inner = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        inner.order.push(stored.id);
        inner.by_id.insert(stored.id, stored.clone());

        Ok(stored)
    }

    fn get_all(&self) -> Result<Vec<ProcurementRequestStored>, RepositoryError> {
        let inner = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    fn get_by_id(
        &self,
        id: RequestId,
    ) -> Result<Option<ProcurementRequestStored>, RepositoryError> {
        let inner = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner.by_id.get(&id).cloned())
    }

    fn update_status(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> Result<Option<ProcurementRequestStored>, RepositoryError> {
        let mut inner = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        match inner.by_id.get_mut(&id) {
            Some(stored) => {
                stored.status = status;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        inner.by_id.clear();
        inner.order.clear();
        Ok(())
    }
}
