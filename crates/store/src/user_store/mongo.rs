//! MongoDB-backed user store.
//!
//! One collection of schema-flexible documents keyed by `_id` (ObjectId).
//! Timestamps are written by this layer, not by the server: `created_at` is
//! set once on insert, `updated_at` on insert and on every replace.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use roster_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

const DEFAULT_DATABASE: &str = "roster";
const COLLECTION: &str = "users";

/// Wire shape of one stored document.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    age: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.into(),
            name: doc.name,
            age: doc.age,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// MongoDB-backed [`UserStore`].
///
/// Cloning is cheap; the driver's `Client` is an `Arc` over a connection
/// pool internally, and pool sizing stays at driver defaults.
#[derive(Debug, Clone)]
pub struct MongoUserStore {
    database: Database,
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Connect using a MongoDB connection string.
    ///
    /// The database is `db_name` when given, otherwise the one named in the
    /// URI path, otherwise `"roster"`. This only parses the URI and builds
    /// the pool; reachability is checked by [`UserStore::ping`].
    pub async fn connect(uri: &str, db_name: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = match db_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        let users = database.collection::<UserDocument>(COLLECTION);
        tracing::debug!(database = database.name(), "mongodb client built");
        Ok(Self { database, users })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users.find(doc! {}).await?;
        let docs: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(User::from).collect())
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let document = UserDocument {
            id: ObjectId::new(),
            name: new.name().to_string(),
            age: new.age(),
            created_at: now,
            updated_at: now,
        };

        self.users.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn update(&self, id: UserId, new: NewUser) -> Result<Option<User>, StoreError> {
        let now = bson::DateTime::from_chrono(Utc::now());
        let updated = self
            .users
            .find_one_and_update(
                doc! { "_id": ObjectId::from(id) },
                doc! { "$set": {
                    "name": new.name(),
                    "age": new.age(),
                    "updated_at": now,
                } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(User::from))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let removed = self
            .users
            .find_one_and_delete(doc! { "_id": ObjectId::from(id) })
            .await?;
        Ok(removed.map(User::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match &*err.kind {
            ErrorKind::BsonSerialization(_)
            | ErrorKind::BsonDeserialization(_)
            | ErrorKind::InvalidResponse { .. } => StoreError::Malformed(err.to_string()),
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}
