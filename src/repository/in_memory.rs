//! Process-local movie store. Contents are lost on restart.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::warn;

use super::MovieRepository;
use crate::{error::AppResult, models::Movie};

#[derive(Default)]
struct Store {
    last_id: i64,
    movies: BTreeMap<i64, Movie>,
}

#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Movie>> {
        let store = self.store.read();
        Ok(store.movies.values().filter(|m| m.country == country).cloned().collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.store.read().movies.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        Ok(self.store.read().movies.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let store = self.store.read();
        let mut matches = store.movies.values().filter(|m| m.title == title);
        let first = matches.next().cloned();
        if matches.next().is_some() {
            warn!(title = %title, "more than one movie shares this title");
            return Ok(None);
        }
        Ok(first)
    }

    async fn persist(&self, movie: &mut Movie) -> AppResult<()> {
        let mut store = self.store.write();
        store.last_id += 1;
        let id = store.last_id;
        movie.id = Some(id);
        store.movies.insert(id, movie.clone());
        Ok(())
    }

    async fn is_persistent(&self, movie: &Movie) -> AppResult<bool> {
        Ok(movie.id.is_some_and(|id| self.store.read().movies.contains_key(&id)))
    }

    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>> {
        let Some(id) = movie.id else {
            return Ok(None);
        };
        let mut store = self.store.write();
        let Some(slot) = store.movies.get_mut(&id) else {
            return Ok(None);
        };
        *slot = movie.clone();
        Ok(Some(movie.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.store.write().movies.remove(&id).is_some())
    }

    /// There is no backing datastore, so the store is always reachable.
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = InMemoryMovieRepository::new();
        let mut first = Movie::new("A", "", "", "X");
        repo.persist(&mut first).await.unwrap();
        repo.delete_by_id(first.id.unwrap()).await.unwrap();

        let mut second = Movie::new("B", "", "", "X");
        repo.persist(&mut second).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn lookups_are_exact_matches() {
        let repo = InMemoryMovieRepository::new();
        let mut movie = Movie::new("FirstMovie", "", "", "Planet");
        repo.persist(&mut movie).await.unwrap();

        assert_eq!(repo.find_by_country("Planet").await.unwrap(), vec![movie.clone()]);
        assert!(repo.find_by_country("planet").await.unwrap().is_empty());
        assert_eq!(repo.find_by_title("FirstMovie").await.unwrap(), Some(movie));
        assert_eq!(repo.find_by_title("First").await.unwrap(), None);
    }

    #[tokio::test]
    async fn ping_always_succeeds() {
        assert!(InMemoryMovieRepository::new().ping().await.is_ok());
    }

    #[tokio::test]
    async fn update_of_missing_id_changes_nothing() {
        let repo = InMemoryMovieRepository::new();
        let mut movie = Movie::new("Kept", "", "", "Brazil");
        repo.persist(&mut movie).await.unwrap();

        let mut other = movie.clone();
        other.id = Some(42);
        other.title = "Changed".into();

        assert_eq!(repo.update(&other).await.unwrap(), None);
        assert_eq!(repo.list_all().await.unwrap(), vec![movie]);
    }
}
