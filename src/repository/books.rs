//! Books repository for database operations.
//!
//! Identity (`id`) and both timestamps are assigned by the database;
//! the table's NOT NULL and non-empty CHECK constraints back up the
//! service-level validation.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books, most recently created first.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, genre, created_at, updated_at
            FROM books
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get a single book by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, genre, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Insert a new book and return it with its assigned id and timestamps.
    pub async fn create(&self, title: &str, author: &str, genre: &str) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, genre, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(genre)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Replace all three text fields of an existing book.
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        author: &str,
        genre: &str,
    ) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, updated_at = now()
            WHERE id = $1
            RETURNING id, title, author, genre, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(author)
        .bind(genre)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }
}
