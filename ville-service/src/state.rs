use crate::repository::VilleRepository;
use crate::service::VilleService;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct VilleAppState<R> {
    pub service: VilleService<R>,
}

impl<R> VilleAppState<R>
where
    R: VilleRepository + Clone,
{
    pub fn new(service: VilleService<R>) -> Self {
        Self { service }
    }
}

impl<R> FromRef<VilleAppState<R>> for VilleService<R>
where
    R: VilleRepository + Clone,
{
    fn from_ref(input: &VilleAppState<R>) -> Self {
        input.service.clone()
    }
}
