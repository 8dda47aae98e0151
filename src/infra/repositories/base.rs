//! Helpers shared by every repository.
//!
//! All lookups go through these so soft-deleted rows stay invisible.

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter};

use crate::errors::{AppError, AppResult};

/// Entity with a nullable `deleted_at` column.
pub trait SoftDelete: EntityTrait {
    fn deleted_at() -> Self::Column;
}

/// Fetch a live row by primary key.
pub async fn find_active<E, C>(conn: &C, id: i32) -> AppResult<Option<E::Model>>
where
    E: SoftDelete,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id)
        .filter(E::deleted_at().is_null())
        .one(conn)
        .await
        .map_err(AppError::from)
}

/// Fetch a live row for an optional foreign key.
pub async fn find_optional<E, C>(conn: &C, id: Option<i32>) -> AppResult<Option<E::Model>>
where
    E: SoftDelete,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    match id {
        Some(id) => find_active::<E, C>(conn, id).await,
        None => Ok(None),
    }
}

pub async fn exists<E, C>(conn: &C, id: i32) -> AppResult<bool>
where
    E: SoftDelete,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    Ok(find_active::<E, C>(conn, id).await?.is_some())
}

/// Fail with `NotFound` unless the row exists.
pub async fn require<E, C>(conn: &C, id: i32) -> AppResult<()>
where
    E: SoftDelete,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    if exists::<E, C>(conn, id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

/// Keep the ids for which `exists` answers true, first occurrence only.
///
/// Lookup failures count as missing.
pub async fn filter_existing<F, Fut>(ids: &[i32], mut exists: F) -> Vec<i32>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        if matches!(exists(id).await, Ok(true)) {
            kept.push(id);
        }
    }
    kept
}

/// Rows expanded concurrently by [`load_all`].
const LOAD_CONCURRENCY: usize = 8;

/// Expand every row into its domain value, keeping row order.
pub async fn load_all<M, T, F, Fut>(models: Vec<M>, load: F) -> AppResult<Vec<T>>
where
    F: FnMut(M) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    stream::iter(models)
        .map(load)
        .buffered(LOAD_CONCURRENCY)
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filter_existing_drops_missing_ids() {
        let kept = filter_existing(&[1, 99], |id| async move { Ok(id != 99) }).await;
        assert_eq!(kept, vec![1]);
    }

    #[tokio::test]
    async fn test_filter_existing_keeps_order_and_dedups() {
        let kept = filter_existing(&[5, 3, 5, 1, 3], |_| async { Ok(true) }).await;
        assert_eq!(kept, vec![5, 3, 1]);
    }

    #[tokio::test]
    async fn test_filter_existing_treats_errors_as_missing() {
        let kept = filter_existing(&[1, 2], |id| async move {
            if id == 2 {
                Err(AppError::internal("boom"))
            } else {
                Ok(true)
            }
        })
        .await;
        assert_eq!(kept, vec![1]);
    }

    #[tokio::test]
    async fn test_load_all_keeps_row_order() {
        let loaded = load_all(vec![3, 1, 2], |id| async move { Ok(id * 10) })
            .await
            .unwrap();
        assert_eq!(loaded, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn test_load_all_stops_on_error() {
        let result: AppResult<Vec<i32>> = load_all(vec![1, 2], |id| async move {
            if id == 2 {
                Err(AppError::NotFound)
            } else {
                Ok(id)
            }
        })
        .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_filter_existing_empty() {
        let kept = filter_existing(&[], |_| async { Ok(true) }).await;
        assert!(kept.is_empty());
    }
}
