use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use roster_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

/// In-memory user store.
///
/// Intended for tests/dev. Keeps records in insertion order to match the
/// default ordering of the MongoDB backend.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(users.clone())
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: new.name().to_string(),
            age: new.age(),
            created_at: now,
            updated_at: now,
        };

        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, new: NewUser) -> Result<Option<User>, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.name = new.name().to_string();
        user.age = new.age();
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let Some(pos) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        Ok(Some(users.remove(pos)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, age: i64) -> NewUser {
        NewUser::new(name, age).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("Ann", 30)).await.unwrap();

        assert_eq!(user.name, "Ann");
        assert_eq!(user.age, 30);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryUserStore::new();
        let a = store.create(new_user("a", 1)).await.unwrap();
        let b = store.create(new_user("b", 2)).await.unwrap();
        let c = store.create(new_user("c", 3)).await.unwrap();

        let ids: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_bumps_updated_at() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("Bo", 22)).await.unwrap();

        let updated = store
            .update(created.id, new_user("Bo", 23))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, 23);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none_not_error() {
        let store = InMemoryUserStore::new();
        let res = store.update(UserId::new(), new_user("x", 1)).await.unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn delete_removes_record_and_is_idempotent() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("Ann", 30)).await.unwrap();

        let first = store.delete(created.id).await.unwrap();
        assert_eq!(first.map(|u| u.id), Some(created.id));
        assert!(store.list_all().await.unwrap().is_empty());

        let second = store.delete(created.id).await.unwrap();
        assert!(second.is_none());
    }
}
