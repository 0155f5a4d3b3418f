use crate::error::VilleRepoError;
use crate::model::Ville;
use async_trait::async_trait;
use engine::id::VilleId;
use error_stack::{Report, ResultExt};
use mongodb::bson::{Document, doc};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Database};
use serde::Serialize;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::debug;

pub type RepoResult<T> = Result<T, Report<VilleRepoError>>;
pub type OptRepoResult<T> = Result<Option<T>, Report<VilleRepoError>>;

const VILLES: &str = "villes";

/// The fields of a ville that the store did not assign itself.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewVille {
    name: String,
    postal_code: Option<String>,
}

impl NewVille {
    pub fn new(name: String, postal_code: Option<String>) -> NewVille {
        Self { name, postal_code }
    }
}

/// The persistence side of the ville endpoints. The store owns id
/// assignment and any domain rules; callers only see this contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VilleRepository: Send + Sync {
    async fn find_one(&self, ville_id: VilleId) -> OptRepoResult<Ville>;
    async fn find_all(&self) -> RepoResult<Vec<Ville>>;
    /// Inserts a new ville; the store picks the id.
    async fn create(&self, ville: NewVille) -> RepoResult<Ville>;
    /// Writes `ville` under `ville_id`, inserting if nothing is there yet,
    /// and returns the canonical persisted form.
    async fn save(&self, ville_id: VilleId, ville: NewVille) -> RepoResult<Ville>;
    /// Deletes without checking existence first.
    async fn delete(&self, ville_id: VilleId) -> RepoResult<()>;
}

#[async_trait]
impl<T> VilleRepository for Arc<T>
where
    T: VilleRepository + ?Sized,
{
    async fn find_one(&self, ville_id: VilleId) -> OptRepoResult<Ville> {
        (**self).find_one(ville_id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Ville>> {
        (**self).find_all().await
    }

    async fn create(&self, ville: NewVille) -> RepoResult<Ville> {
        (**self).create(ville).await
    }

    async fn save(&self, ville_id: VilleId, ville: NewVille) -> RepoResult<Ville> {
        (**self).save(ville_id, ville).await
    }

    async fn delete(&self, ville_id: VilleId) -> RepoResult<()> {
        (**self).delete(ville_id).await
    }
}

#[derive(Debug, Clone)]
pub struct VilleRepo {
    db: Database,
}

impl VilleRepo {
    pub fn new(client: Client) -> VilleRepo {
        Self {
            db: client.database(VILLES),
        }
    }
}

#[async_trait]
impl VilleRepository for VilleRepo {
    async fn find_one(&self, ville_id: VilleId) -> OptRepoResult<Ville> {
        self.db
            .collection::<Ville>(VILLES)
            .find_one(doc! { "_id": ville_id })
            .await
            .change_context(VilleRepoError::Find)
    }

    async fn find_all(&self) -> RepoResult<Vec<Ville>> {
        self.db
            .collection::<Ville>(VILLES)
            .find(Document::default())
            .await
            .change_context(VilleRepoError::List)?
            .collect::<Result<_, _>>()
            .await
            .change_context(VilleRepoError::List)
    }

    async fn create(&self, ville: NewVille) -> RepoResult<Ville> {
        let result = self
            .db
            .collection::<NewVille>(VILLES)
            .insert_one(&ville)
            .await
            .change_context(VilleRepoError::Create)?;

        Ok(Ville {
            id: VilleId::new(
                result
                    .inserted_id
                    .as_object_id()
                    .ok_or(VilleRepoError::Create)?,
            ),
            name: ville.name,
            postal_code: ville.postal_code,
        })
    }

    async fn save(&self, ville_id: VilleId, ville: NewVille) -> RepoResult<Ville> {
        let NewVille { name, postal_code } = ville;
        let update = doc! { "$set": { "name": name, "postal_code": postal_code } };

        debug!("saving ville {ville_id}");

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let saved = self
            .db
            .collection::<Ville>(VILLES)
            .find_one_and_update(doc! { "_id": ville_id }, update)
            .with_options(options)
            .await
            .change_context(VilleRepoError::Save)?
            .ok_or(VilleRepoError::Save)?;

        Ok(saved)
    }

    async fn delete(&self, ville_id: VilleId) -> RepoResult<()> {
        let result = self
            .db
            .collection::<Ville>(VILLES)
            .delete_one(doc! { "_id": ville_id })
            .await
            .change_context(VilleRepoError::Delete)?;

        debug!("deleted {} ville documents", result.deleted_count);

        Ok(())
    }
}
