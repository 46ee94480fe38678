//! Catalog management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Verify database connectivity (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }

    /// List all books, newest creation first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a single book by ID
    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Create a new book. Validation happens before any persistence call.
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        let payload = payload.trimmed();
        payload.validate()?;

        let book = self
            .repository
            .books
            .create(&payload.title, &payload.author, &payload.genre)
            .await?;

        tracing::info!(id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Replace all three text fields of an existing book.
    /// No partial update: the payload must carry every field.
    pub async fn update_book(&self, id: Uuid, payload: BookPayload) -> AppResult<Book> {
        let payload = payload.trimmed();
        payload.validate()?;

        let book = self
            .repository
            .books
            .update(id, &payload.title, &payload.author, &payload.genre)
            .await?;

        tracing::info!(id = %book.id, "Book updated");
        Ok(book)
    }

    /// Delete a book by ID
    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(%id, "Book deleted");
        Ok(())
    }
}
