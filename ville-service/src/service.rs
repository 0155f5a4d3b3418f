use crate::error::VilleServiceError;
use crate::model::Ville;
use crate::repository::{NewVille, VilleRepository};
use crate::{OptServiceResult, ServiceResult};
use engine::id::VilleId;
use error_stack::ResultExt;
use tracing::instrument;

#[derive(Clone)]
pub struct VilleService<R> {
    repo: R,
}

impl<R> VilleService<R>
where
    R: VilleRepository,
{
    pub fn new(repo: R) -> VilleService<R> {
        VilleService { repo }
    }

    #[instrument(skip_all, name = "service#get")]
    pub async fn get(&self, ville_id: VilleId) -> OptServiceResult<Ville> {
        self.repo
            .find_one(ville_id)
            .await
            .change_context(VilleServiceError)
    }

    pub async fn list(&self) -> ServiceResult<Vec<Ville>> {
        self.repo.find_all().await.change_context(VilleServiceError)
    }

    #[instrument(skip_all, name = "service#create")]
    pub async fn create(&self, name: String, postal_code: Option<String>) -> ServiceResult<Ville> {
        self.repo
            .create(NewVille::new(name, postal_code))
            .await
            .change_context(VilleServiceError)
    }

    #[instrument(skip_all, name = "service#save")]
    pub async fn save(
        &self,
        ville_id: VilleId,
        name: String,
        postal_code: Option<String>,
    ) -> ServiceResult<Ville> {
        self.repo
            .save(ville_id, NewVille::new(name, postal_code))
            .await
            .change_context(VilleServiceError)
    }

    #[instrument(skip_all, name = "service#delete")]
    pub async fn delete(&self, ville_id: VilleId) -> ServiceResult<()> {
        self.repo
            .delete(ville_id)
            .await
            .change_context(VilleServiceError)
    }
}
