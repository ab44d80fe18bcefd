use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use tracing::{debug, warn};

use super::MovieRepository;
use crate::{entities::movie as entity, error::AppResult, models::Movie};

#[derive(Clone)]
pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Movie>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::Country.eq(country))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Movie>> {
        let rows = entity::Entity::find().order_by_asc(entity::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let row = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Movie::from))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let mut rows = entity::Entity::find()
            .filter(entity::Column::Title.eq(title))
            .order_by_asc(entity::Column::Id)
            .limit(2u64)
            .all(&self.db)
            .await?;

        if rows.len() > 1 {
            warn!(title = %title, "more than one movie shares this title");
            return Ok(None);
        }
        Ok(rows.pop().map(Movie::from))
    }

    async fn persist(&self, movie: &mut Movie) -> AppResult<()> {
        let model = entity::ActiveModel {
            id: NotSet,
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            director: Set(movie.director.clone()),
            country: Set(movie.country.clone()),
        };

        let inserted = model.insert(&self.db).await?;
        debug!(id = inserted.id, title = %inserted.title, "persisted movie");
        movie.id = Some(inserted.id);
        Ok(())
    }

    async fn is_persistent(&self, movie: &Movie) -> AppResult<bool> {
        let Some(id) = movie.id else {
            return Ok(false);
        };
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>> {
        let Some(id) = movie.id else {
            return Ok(None);
        };

        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Title, Expr::value(movie.title.clone()))
            .col_expr(entity::Column::Description, Expr::value(movie.description.clone()))
            .col_expr(entity::Column::Director, Expr::value(movie.director.clone()))
            .col_expr(entity::Column::Country, Expr::value(movie.country.clone()))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        debug!(id = id, "updated movie");
        Ok(Some(movie.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            debug!(id = id, "deleted movie");
        }
        Ok(result.rows_affected > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}
