use axum::{
    body::HttpBody,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    BoxError,
    Router,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

// each request gets its own service, connections come from the shared pool
fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.pool)
}

// routes accepts any request body, lambda_http::Body in the binary and hyper::Body in tests
pub fn routes<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    let books_path = format!("{}/book", state.config.api_prefix);
    let book_path = format!("{}/book/:id", state.config.api_prefix);
    Router::new()
        .route(books_path.as_str(), get(list_books).post(add_book).put(update_book))
        .route(book_path.as_str(), get(find_book_by_id).delete(remove_book))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
    if res.books.is_empty() {
        return Err((StatusCode::NOT_FOUND, "No books found".to_string()));
    }
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::catalog::controller::routes;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::utils::sql::build_test_pool;

    async fn build_app() -> Router {
        let state = AppState::new(Configuration::new("sqlite::memory:"), build_test_pool().await);
        routes(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }.expect("should build request");
        let res = app.clone().oneshot(req).await.expect("should handle request");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        (status, bytes.to_vec())
    }

    fn dune() -> Value {
        json!({"title": "Dune", "author_first_name": "Frank", "author_last_name": "Herbert", "genre": "science fiction"})
    }

    #[tokio::test]
    async fn test_should_add_and_get_book() {
        let app = build_app().await;
        let (status, body) = send(&app, Method::POST, "/api/book", Some(dune())).await;
        assert_eq!(StatusCode::OK, status);
        let added: Value = serde_json::from_slice(&body).expect("should return json");
        let id = added["book"]["book_id"].as_i64().expect("should have id");

        let (status, body) = send(&app, Method::GET, format!("/api/book/{}", id).as_str(), None).await;
        assert_eq!(StatusCode::OK, status);
        let loaded: Value = serde_json::from_slice(&body).expect("should return json");
        assert_eq!(added, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let app = build_app().await;
        let (status, _) = send(&app, Method::POST, "/api/book", Some(dune())).await;
        assert_eq!(StatusCode::OK, status);
        let (status, body) = send(&app, Method::POST, "/api/book", Some(dune())).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("A book with the title Dune by author Frank Herbert already exists",
                   String::from_utf8(body).expect("should be text"));
    }

    #[tokio::test]
    async fn test_should_reject_malformed_book() {
        let app = build_app().await;
        let (status, _) = send(&app, Method::POST, "/api/book", Some(json!({"title": "Dune"}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_report_empty_catalog() {
        let app = build_app().await;
        let (status, body) = send(&app, Method::GET, "/api/book", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("No books found", String::from_utf8(body).expect("should be text"));
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let app = build_app().await;
        let _ = send(&app, Method::POST, "/api/book", Some(dune())).await;
        let (status, body) = send(&app, Method::GET, "/api/book", None).await;
        assert_eq!(StatusCode::OK, status);
        let listed: Value = serde_json::from_slice(&body).expect("should return json");
        assert_eq!(1, listed["books"].as_array().expect("should be a list").len());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let app = build_app().await;
        let (_, body) = send(&app, Method::POST, "/api/book", Some(dune())).await;
        let added: Value = serde_json::from_slice(&body).expect("should return json");
        let id = added["book"]["book_id"].as_i64().expect("should have id");

        let changes = json!({"book_id": id, "title": "Dune Messiah", "author_first_name": "Frank", "author_last_name": "Herbert"});
        let (status, body) = send(&app, Method::PUT, "/api/book", Some(changes)).await;
        assert_eq!(StatusCode::OK, status);
        let updated: Value = serde_json::from_slice(&body).expect("should return json");
        assert_eq!("Dune Messiah", updated["book"]["title"]);
        assert_eq!(Value::Null, updated["book"]["genre"]);
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_book() {
        let app = build_app().await;
        let changes = json!({"book_id": 12, "title": "Dune", "author_first_name": "Frank", "author_last_name": "Herbert"});
        let (status, _) = send(&app, Method::PUT, "/api/book", Some(changes)).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let app = build_app().await;
        let (_, body) = send(&app, Method::POST, "/api/book", Some(dune())).await;
        let added: Value = serde_json::from_slice(&body).expect("should return json");
        let uri = format!("/api/book/{}", added["book"]["book_id"]);

        let (status, _) = send(&app, Method::DELETE, uri.as_str(), None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
        let (status, _) = send(&app, Method::GET, uri.as_str(), None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = send(&app, Method::DELETE, uri.as_str(), None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
    }

    #[tokio::test]
    async fn test_should_serve_lambda_requests() {
        let app: Router<(), lambda_http::Body> =
            routes(AppState::new(Configuration::new("sqlite::memory:"), build_test_pool().await));
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/book")
            .header("content-type", "application/json")
            .body(lambda_http::Body::Text(dune().to_string()))
            .expect("should build request");
        let res = app.clone().oneshot(req).await.expect("should handle request");
        assert_eq!(StatusCode::OK, res.status());

        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/book")
            .body(lambda_http::Body::Empty)
            .expect("should build request");
        let res = app.oneshot(req).await.expect("should handle request");
        assert_eq!(StatusCode::OK, res.status());
    }

    #[tokio::test]
    async fn test_should_route_prefix_without_leading_slash() {
        let config = Configuration::from_vars(|k| {
            if k == "BOOKS_API_PREFIX" { Some("v1/".to_string()) } else { None }
        }).expect("should build config");
        let app = routes(AppState::new(config, build_test_pool().await));
        let (status, body) = send(&app, Method::GET, "/v1/book", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("No books found", String::from_utf8(body).expect("should be text"));
    }

    #[tokio::test]
    async fn test_should_report_storage_failure() {
        let pool = build_test_pool().await;
        let app = routes(AppState::new(Configuration::new("sqlite::memory:"), pool.clone()));
        pool.close().await;
        let (status, body) = send(&app, Method::GET, "/api/book/1", None).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!("An error occurred while retrieving the book", String::from_utf8(body).expect("should be text"));
    }
}
