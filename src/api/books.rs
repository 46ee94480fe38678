//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
};

/// Delete confirmation body
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// A malformed identifier can't match any book, so it maps to the same
/// not-found response as an unknown id.
fn parse_book_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Book not found".to_string()))
}

/// List all books, newest creation first
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, most recently created first", body = Vec<Book>),
        (status = 500, description = "Store unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_book_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing or empty field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book, replacing all three text fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Missing or empty field", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<Book>> {
    let id = parse_book_id(&id)?;
    let updated = state.services.catalog.update_book(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_book_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(Json(DeleteResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_is_reported_as_not_found() {
        let err = parse_book_id("not-a-uuid").unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn well_formed_id_parses() {
        assert!(parse_book_id("0193c746-2fd0-7e15-b2cf-58e00e5cbf14").is_ok());
    }
}
