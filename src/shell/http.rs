use axum::{
    Extension, Json, Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    },
    routing::get,
};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::posts::use_cases::create_post::inbound::http as create_http;
use crate::modules::posts::use_cases::delete_post::inbound::http as delete_http;
use crate::modules::posts::use_cases::get_post::inbound::http as get_http;
use crate::modules::posts::use_cases::list_posts::inbound::http as list_http;
use crate::modules::posts::use_cases::replace_post::inbound::http as replace_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

/// CORS policy for the `/api` routes. Origins outside the list get no
/// `Access-Control-Allow-Origin` header.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ])
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let schema = build_schema(state.clone());

    // The trailing slash form is what existing clients call.
    let posts = Router::new()
        .route("/posts", get(list_http::handle).post(create_http::handle))
        .route("/posts/", get(list_http::handle).post(create_http::handle))
        .route(
            "/posts/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .delete(delete_http::handle),
        )
        .layer(cors);

    Router::new()
        .route("/", get(liveness))
        .nest("/api", posts)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn liveness() -> Json<Value> {
    Json(json!({ "status": "online" }))
}
