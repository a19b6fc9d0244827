//! Test helpers building a migrated database and the HTTP router on top of it

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub dir: TempDir,
    pub state: bittencourt_shared::State,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let url = format!("sqlite:{}", dir.child("db.sqlite3").to_string_lossy());
        let pool = bittencourt::db::create_pool(&url, 1).await?;
        bittencourt_db::migrate(&pool).await?;

        Ok(Self {
            dir,
            state: bittencourt_shared::State::single(pool),
        })
    }

    pub fn router(&self) -> Router {
        bittencourt::router(bittencourt::AppState::new(self.state.clone()))
    }

    pub fn query(&self) -> bittencourt_contact::Query {
        bittencourt_contact::Query(self.state.read_db.clone())
    }

    pub async fn post_json(&self, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.post_raw(body.to_string(), Some("application/json"))
            .await
    }

    pub async fn post_raw(
        &self,
        body: impl Into<Body>,
        content_type: Option<&str>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut request = Request::builder().method(Method::POST).uri("/api/contact");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let response = self.router().oneshot(request.body(body.into())?).await?;
        read_json(response).await
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let response = self.router().oneshot(request).await?;
        read_json(response).await
    }
}

async fn read_json(response: axum::response::Response) -> anyhow::Result<(StatusCode, Value)> {
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
