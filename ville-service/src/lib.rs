use crate::error::VilleServiceError;
use error_stack::Report;

pub type ServiceResult<T> = Result<T, Report<VilleServiceError>>;
pub type OptServiceResult<T> = Result<Option<T>, Report<VilleServiceError>>;

pub mod error;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;
