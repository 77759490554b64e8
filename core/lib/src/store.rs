use async_trait::async_trait;

use crate::book::{
    self,
    Book,
};


#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("book store unavailable: {0}")]
    Unavailable(String),
    #[error("book store backend failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Storage seam for the dispatcher.
///
/// A fresh repository is created for every invocation by the application's
/// store factory, so implementations only need to be consistent within one
/// request.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    async fn add_book(&mut self, book: Book) -> Result<Book, StoreError>;
}

/// Transient catalogue seeded from [`book::seed`]. Additions live only as
/// long as the value does.
#[derive(Debug, Default)]
pub struct InMemoryBooks {
    books: Vec<Book>,
}

impl InMemoryBooks {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }

    pub fn seeded() -> Self {
        Self::new(book::seed())
    }
}

#[async_trait]
impl BookRepository for InMemoryBooks {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.clone())
    }

    async fn add_book(&mut self, book: Book) -> Result<Book, StoreError> {
        self.books.push(book.clone());

        Ok(book)
    }
}
