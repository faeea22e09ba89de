//! Resource handlers
//!
//! One handler group per entity. Each handler receives the injected
//! [`Store`](crate::storage::Store) and the parsed request arguments,
//! opens a single transaction, runs its checks, performs at most one
//! mutation and commits. Every early return drops the transaction, which
//! rolls it back.

pub mod course;
pub mod enrollment;
mod errors;
mod parser;
mod response;
pub mod student;

pub use errors::{ApiError, ApiResult};
pub use parser::{RequestArgs, MISSING_ARGUMENT_HELP};
pub use response::MessageResponse;

use crate::storage::{StorageError, StorageResult, StoreTx};

/// Finish a write: commit if it succeeded, otherwise roll back and map
/// the failure. A failing commit is treated like a failing write.
pub(crate) async fn commit_write<T>(
    tx: StoreTx,
    written: StorageResult<T>,
    on_failure: impl FnOnce(StorageError) -> ApiError,
) -> ApiResult<T> {
    let value = match written {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(code = err.code(), error = %err, "write rejected, rolling back");
            if let Err(rollback) = tx.rollback().await {
                tracing::error!(error = %rollback, "rollback failed");
            }
            return Err(on_failure(err));
        }
    };

    if let Err(err) = tx.commit().await {
        let err = StorageError::from(err);
        tracing::warn!(code = err.code(), error = %err, "commit failed");
        return Err(on_failure(err));
    }

    Ok(value)
}
