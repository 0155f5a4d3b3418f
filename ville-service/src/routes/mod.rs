use crate::error::VilleServiceError;
use crate::model::Ville;
use crate::repository::VilleRepository;
use crate::service::VilleService;
use crate::state::VilleAppState;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{
    Json, Router,
    extract::{Path, State},
};
use engine::error::{EntityAlert, ServiceError};
use engine::id::VilleId;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

const VILLE_ROOT_PATH: &str = "/villes";

const ENTITY_NAME: &str = "ville";

#[derive(OpenApi)]
#[openapi(
    nest(
        (path = VILLE_ROOT_PATH, api = VilleDocs),
    )
)]
struct ApiDoc;

#[derive(OpenApi)]
#[openapi(paths(list_villes, get_ville, create_ville, update_ville, delete_ville,))]
struct VilleDocs;

/// The wire form of a ville. The id is optional: create rejects it, update
/// branches on it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VilleRequest {
    id: Option<VilleId>,
    name: String,
    postal_code: Option<String>,
}

const VILLE_LIST_PATH: &str = "/";
const VILLE_GET_PATH: &str = "/{ville_id}";
const VILLE_CREATE_PATH: &str = "/";
const VILLE_UPDATE_PATH: &str = "/";
const VILLE_DELETE_PATH: &str = "/{ville_id}";

pub fn build<R>(app_state: VilleAppState<R>) -> Router
where
    R: VilleRepository + Clone + 'static,
{
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes(app_state))
        .split_for_parts();

    router.merge(SwaggerUi::new("/villes/swagger-ui").url("/villes/api-docs/openapi.json", api))
}

fn routes<R, S>(app_state: VilleAppState<R>) -> OpenApiRouter<S>
where
    R: VilleRepository + Clone + 'static,
{
    OpenApiRouter::new()
        .nest(
            VILLE_ROOT_PATH,
            OpenApiRouter::new()
                .route(VILLE_LIST_PATH, get(list_villes::<R>))
                .route(VILLE_GET_PATH, get(get_ville::<R>))
                .route(VILLE_CREATE_PATH, post(create_ville::<R>))
                .route(VILLE_UPDATE_PATH, put(update_ville::<R>))
                .route(VILLE_DELETE_PATH, delete(delete_ville::<R>)),
        )
        .with_state(app_state)
}

#[derive(Debug, Serialize, ToSchema)]
struct VilleResponse {
    #[serde(skip)]
    status_code: StatusCode,
    #[serde(skip)]
    location: Option<String>,
    id: VilleId,
    name: String,
    postal_code: Option<String>,
}

impl VilleResponse {
    fn ok(ville: Ville) -> Self {
        Self {
            status_code: StatusCode::OK,
            location: None,
            id: ville.id,
            name: ville.name,
            postal_code: ville.postal_code,
        }
    }

    fn created(ville: Ville) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            location: Some(format!("{VILLE_ROOT_PATH}/{}", ville.id)),
            id: ville.id,
            name: ville.name,
            postal_code: ville.postal_code,
        }
    }
}

impl IntoResponse for VilleResponse {
    fn into_response(self) -> Response {
        match self.location.clone() {
            Some(location) => {
                (self.status_code, [(header::LOCATION, location)], Json(self)).into_response()
            }
            None => (self.status_code, Json(self)).into_response(),
        }
    }
}

/// List every persisted ville.
#[utoipa::path(
    get,
    path = VILLE_LIST_PATH,
    responses(
        (status = OK, description = "All persisted villes in store order; empty array when none exist", body = Vec<VilleResponse>),
    )
)]
#[instrument(skip(service), err(Debug))]
pub async fn list_villes<R>(
    State(service): State<VilleService<R>>,
) -> Result<Response, ServiceError<VilleServiceError>>
where
    R: VilleRepository + Clone + 'static,
{
    let villes = service.list().await?;

    Ok(Json(
        villes
            .into_iter()
            .map(VilleResponse::ok)
            .collect::<Vec<_>>(),
    )
    .into_response())
}

/// Get the ville associated with the given id.
#[utoipa::path(
    get,
    path = VILLE_GET_PATH,
    responses(
        (status = OK, description = "A ville was found that matched the given VilleId", body = VilleResponse),
        (status = NOT_FOUND, description = "No ville with the given VilleId was found"),
    ),
    params(
        ("ville_id" = VilleId, Path, description = "The VilleId to find"),
    )
)]
#[instrument(skip(service), err(Debug))]
pub async fn get_ville<R>(
    State(service): State<VilleService<R>>,
    Path(ville_id): Path<VilleId>,
) -> Result<Response, ServiceError<VilleServiceError>>
where
    R: VilleRepository + Clone + 'static,
{
    let ville = service.get(ville_id).await?;

    Ok(ville
        .map(|v| VilleResponse::ok(v).into_response())
        .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response()))
}

/// Create a new ville. The request must not carry an id; the store assigns one.
#[utoipa::path(
    post,
    path = VILLE_CREATE_PATH,
    responses(
        (status = CREATED, description = "The ville was created; the Location header points at it", body = VilleResponse),
        (status = BAD_REQUEST, description = "The request already carried an id", body = EntityAlert),
    ),
    request_body = VilleRequest
)]
#[instrument(skip_all, err(Debug), fields(req.name = ville.name, req.postal_code = ville.postal_code))]
async fn create_ville<R>(
    State(service): State<VilleService<R>>,
    Json(ville): Json<VilleRequest>,
) -> Result<Response, ServiceError<VilleServiceError>>
where
    R: VilleRepository + Clone + 'static,
{
    if ville.id.is_some() {
        return Ok(EntityAlert::bad_request(
            ENTITY_NAME,
            "idexists",
            "a new ville cannot already have an id",
        )
        .into_response());
    }

    let created = service.create(ville.name, ville.postal_code).await?;
    Ok(VilleResponse::created(created).into_response())
}

/// Update the ville carried in the body. A request without an id falls back
/// to the create path and answers exactly like a create.
#[utoipa::path(
    put,
    path = VILLE_UPDATE_PATH,
    responses(
        (status = OK, description = "The ville was saved under its existing id", body = VilleResponse),
        (status = CREATED, description = "No id was given, so a new ville was created", body = VilleResponse),
    ),
    request_body = VilleRequest
)]
#[instrument(skip_all, err(Debug), fields(req.id = ?ville.id, req.name = ville.name))]
pub async fn update_ville<R>(
    State(service): State<VilleService<R>>,
    Json(ville): Json<VilleRequest>,
) -> Result<Response, ServiceError<VilleServiceError>>
where
    R: VilleRepository + Clone + 'static,
{
    match ville.id {
        None => {
            let created = service.create(ville.name, ville.postal_code).await?;
            Ok(VilleResponse::created(created).into_response())
        }
        Some(ville_id) => {
            let saved = service
                .save(ville_id, ville.name, ville.postal_code)
                .await?;
            Ok(VilleResponse::ok(saved).into_response())
        }
    }
}

/// Delete the ville associated with the given id. Deletion is unconditional:
/// the response is OK whether or not the ville existed.
#[utoipa::path(
    delete,
    path = VILLE_DELETE_PATH,
    responses(
        (status = OK, description = "The ville was deleted, or never existed"),
    ),
    params(
        ("ville_id" = VilleId, Path, description = "The id of the ville to delete")
    )
)]
#[instrument(skip(service), err(Debug))]
pub async fn delete_ville<R>(
    State(service): State<VilleService<R>>,
    Path(ville_id): Path<VilleId>,
) -> Result<StatusCode, ServiceError<VilleServiceError>>
where
    R: VilleRepository + Clone + 'static,
{
    service.delete(ville_id).await?;
    Ok(StatusCode::OK)
}
