//! Book inventory endpoints

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookIdQuery, CreateBook},
    AppState,
};

use super::IndentedJson;

/// Raw query pairs, kept in request order
type IdQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> IndentedJson<Vec<Book>> {
    IndentedJson(state.services.inventory.list().await)
}

/// Get book by ID
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
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<IndentedJson<Book>> {
    let book = state.services.inventory.get_by_id(&id).await?;
    Ok(IndentedJson(book))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, IndentedJson<Book>)> {
    // `null` reads as an empty book
    let data: Option<CreateBook> =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedInput(e.to_string()))?;
    let data = data.unwrap_or_default();

    let book = state.services.inventory.create(data).await;
    Ok((StatusCode::CREATED, IndentedJson(book)))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book checked out", body = Book),
        (status = 400, description = "Missing id or no copies left", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    query: IdQuery,
) -> AppResult<IndentedJson<Book>> {
    let id = required_id(query)?;
    let book = state.services.inventory.checkout(&id).await?;
    Ok(IndentedJson(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Missing id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    query: IdQuery,
) -> AppResult<IndentedJson<Book>> {
    let id = required_id(query)?;
    let book = state.services.inventory.return_book(&id).await?;
    Ok(IndentedJson(book))
}

fn required_id(query: IdQuery) -> AppResult<String> {
    let Query(pairs) = query?;
    BookIdQuery::from_pairs(pairs)
        .id
        .ok_or_else(|| AppError::BadRequest("Missing id query parameter".to_string()))
}
