//! Persistence access for movies.
//!
//! Absence is reported as `Ok(None)`, `Ok(false)` or an empty vec. The `Err` arm is
//! reserved for datastore faults, which callers surface as 5xx.

mod database;
mod in_memory;

use async_trait::async_trait;

pub use database::SeaOrmMovieRepository;
pub use in_memory::InMemoryMovieRepository;

use crate::{error::AppResult, models::Movie};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Movies whose country equals `country` exactly, ordered by id.
    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Movie>>;

    /// Every stored movie, ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Movie>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// The single movie titled `title`. Duplicate titles resolve to `None`.
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>>;

    /// Inserts `movie` and writes the assigned id back into it.
    async fn persist(&self, movie: &mut Movie) -> AppResult<()>;

    /// Whether `movie` carries an id that resolves to a stored row.
    async fn is_persistent(&self, movie: &Movie) -> AppResult<bool>;

    /// Overwrites the stored row with the same id. `None` when there is no such row.
    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
