#[derive(Debug, thiserror::Error)]
#[error("ville service failed")]
pub struct VilleServiceError;

#[derive(Debug, thiserror::Error)]
pub enum VilleRepoError {
    #[error("failed to get ville")]
    Find,
    #[error("failed to list villes")]
    List,
    #[error("failed to create ville")]
    Create,
    #[error("failed to save ville")]
    Save,
    #[error("failed to delete ville")]
    Delete,
}
