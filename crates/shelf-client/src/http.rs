//! `reqwest` implementation of [`BooksApi`]

use crate::api::{BooksApi, CreateOutcome};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::StatusCode;
use shelf_model::wire::{BookEnvelope, BooksEnvelope, CreateBookRequest, ErrorsEnvelope, BOOKS_PATH};
use shelf_model::Book;

/// Books API over HTTP
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    client: reqwest::Client,
    books_url: String,
}

impl HttpBooksApi {
    /// Client for a server at `base_url`, e.g. `http://127.0.0.1:3000`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing `reqwest` client
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            books_url: format!("{}{BOOKS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the books resource
    #[inline]
    #[must_use]
    pub fn books_url(&self) -> &str {
        &self.books_url
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.client.get(&self.books_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let envelope: BooksEnvelope = response.json().await?;
        Ok(envelope.books)
    }

    async fn create(&self, title: &str) -> Result<CreateOutcome, ClientError> {
        let response = self
            .client
            .post(&self.books_url)
            .json(&CreateBookRequest::titled(title))
            .send()
            .await?;

        match response.status() {
            StatusCode::UNPROCESSABLE_ENTITY => {
                let envelope: ErrorsEnvelope = response.json().await?;
                Ok(CreateOutcome::Rejected(envelope.errors))
            }
            status if status.is_success() => {
                let envelope: BookEnvelope = response.json().await?;
                Ok(CreateOutcome::Created(envelope.book))
            }
            status => Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}
