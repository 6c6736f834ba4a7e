use crate::lock_table::{DigestUpdate, LockTable, RemoteFailure, RemoteFailureKind};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory lock table that records every request and answers with a
/// canned result.
pub(crate) struct FakeLockTable {
    response: Result<(), RemoteFailure>,
    requests: Mutex<Vec<DigestUpdate>>,
}

impl FakeLockTable {
    pub(crate) fn accepting() -> Self {
        Self::with_response(Ok(()))
    }

    pub(crate) fn failing(kind: RemoteFailureKind, message: &str) -> Self {
        Self::with_response(Err(RemoteFailure::new(kind, message)))
    }

    fn with_response(response: Result<(), RemoteFailure>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<DigestUpdate> {
        self.requests
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

#[async_trait]
impl LockTable for FakeLockTable {
    async fn update_digest(&self, update: &DigestUpdate) -> Result<(), RemoteFailure> {
        self.requests
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(update.clone());
        self.response.clone()
    }
}
