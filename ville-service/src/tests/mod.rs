//! Contract tests for the ville endpoints: status codes, response bodies,
//! and headers, exercised against a mocked persistence port.
use crate::model::Ville;
use crate::repository::MockVilleRepository;
use crate::routes;
use crate::service::VilleService;
use crate::state::VilleAppState;
use axum_test::{TestResponse, TestServer};
use engine::id::VilleId;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use std::sync::Arc;


fn init_test_server(repo: MockVilleRepository) -> TestServer {
    let app_state = VilleAppState::new(VilleService::new(Arc::new(repo)));

    let routes = routes::build(app_state);

    TestServer::new(routes).expect("creation of test server")
}

async fn run_get_endpoint(path: &str, repo: MockVilleRepository) -> TestResponse {
    let server = init_test_server(repo);

    server.get(path).await
}

async fn run_post_endpoint<T>(path: &str, repo: MockVilleRepository, body: &T) -> TestResponse
where
    T: Serialize,
{
    let server = init_test_server(repo);

    server.post(path).json(body).await
}

async fn run_put_endpoint<T>(path: &str, repo: MockVilleRepository, body: &T) -> TestResponse
where
    T: Serialize,
{
    let server = init_test_server(repo);

    server.put(path).json(body).await
}

async fn run_delete_endpoint(path: &str, repo: MockVilleRepository) -> TestResponse {
    let server = init_test_server(repo);

    server.delete(path).await
}

fn persisted_ville(name: &str, postal_code: Option<&str>) -> Ville {
    Ville {
        id: VilleId::new(ObjectId::new()),
        name: name.to_owned(),
        postal_code: postal_code.map(str::to_owned),
    }
}
