//! Lock acquisition helpers shared by the in-memory stores.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

const POISONED: &str = "store lock poisoned";

/// Acquire a read guard, mapping poisoning through `storage`.
pub(super) fn read<'a, T, E>(
    lock: &'a RwLock<T>,
    storage: impl FnOnce(&'static str) -> E,
) -> Result<RwLockReadGuard<'a, T>, E> {
    lock.read().map_err(|_| {
        error!(store = std::any::type_name::<T>(), "read lock poisoned");
        storage(POISONED)
    })
}

/// Acquire a write guard, mapping poisoning through `storage`.
pub(super) fn write<'a, T, E>(
    lock: &'a RwLock<T>,
    storage: impl FnOnce(&'static str) -> E,
) -> Result<RwLockWriteGuard<'a, T>, E> {
    lock.write().map_err(|_| {
        error!(store = std::any::type_name::<T>(), "write lock poisoned");
        storage(POISONED)
    })
}
