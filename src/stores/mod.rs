//! Stateful collection stores.
//!
//! Each store owns its API module, the fetched collection, and a loading
//! flag. Fetches replace the collection and swallow failures (the last known
//! state is kept); mutations apply the server-returned entity to the local
//! list and re-throw failures, leaving the previous state untouched.

pub mod account;
pub mod auth;
pub mod budget;
pub mod category;
pub mod transaction;

pub use account::AccountStore;
pub use auth::AuthStore;
pub use budget::BudgetStore;
pub use category::CategoryStore;
pub use transaction::TransactionStore;

use uuid::Uuid;

use crate::domain::Identifiable;

/// Replaces the entry matching `entity`'s id; no-op when the id is absent.
fn replace_by_id<T: Identifiable>(items: &mut [T], entity: T) -> bool {
    match items.iter().position(|item| item.id() == entity.id()) {
        Some(index) => {
            items[index] = entity;
            true
        }
        None => false,
    }
}

/// Removes the entry with `id`, reporting whether anything was removed.
fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Replaces by id when present, appends otherwise.
fn upsert_by_id<T: Identifiable>(items: &mut Vec<T>, entity: T) {
    match items.iter().position(|item| item.id() == entity.id()) {
        Some(index) => items[index] = entity,
        None => items.push(entity),
    }
}
