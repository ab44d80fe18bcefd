use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::{error::AppResult, models::Movie, repository::MovieRepository};

const PRAGMAS: [&str; 3] =
    ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA cache_size=-64000"];

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Inserts a small fixture set when the store is empty. Returns how many rows were added.
pub async fn seed_if_empty(repo: &dyn MovieRepository) -> AppResult<usize> {
    if !repo.list_all().await?.is_empty() {
        return Ok(0);
    }

    let mut fixtures = [
        Movie::new("FirstMovie", "First movie description", "First Director", "Planet"),
        Movie::new("SecondMovie", "Second movie description", "Second Director", "Brazil"),
    ];
    for movie in fixtures.iter_mut() {
        repo.persist(movie).await?;
    }

    tracing::info!(count = fixtures.len(), "seeded demo movies");
    Ok(fixtures.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMovieRepository;

    #[tokio::test]
    async fn seeds_only_an_empty_store() {
        let repo = InMemoryMovieRepository::new();

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);

        let planet = repo.find_by_country("Planet").await.unwrap();
        assert_eq!(planet.len(), 1);
        assert_eq!(planet[0].title, "FirstMovie");
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());

        connect_and_migrate(&url).await.unwrap();
        let db = connect_and_migrate(&url).await.unwrap();

        assert!(db.ping().await.is_ok());
    }
}
