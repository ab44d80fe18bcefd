use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// A movie as seen by callers of the repository and by HTTP clients.
///
/// `id` stays `None` until the movie has been persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub director: String,
    pub country: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        director: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            director: director.into(),
            country: country.into(),
        }
    }

    /// Overwrites the mutable fields present in `changes`. The id is never touched.
    pub fn apply(&mut self, changes: MovieChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(director) = changes.director {
            self.director = director;
        }
        if let Some(country) = changes.country {
            self.country = country;
        }
    }

    pub fn location(&self) -> Option<String> {
        self.id.map(|id| format!("/movies/{id}"))
    }
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: Some(m.id),
            title: m.title,
            description: m.description,
            director: m.director,
            country: m.country,
        }
    }
}

/// Body of `POST /movies`. Missing fields become empty strings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub director: String,
    pub country: String,
}

impl From<NewMovie> for Movie {
    fn from(n: NewMovie) -> Self {
        Movie::new(n.title, n.description, n.director, n.country)
    }
}

/// Body of `PUT /movies/{id}`: any subset of the mutable fields.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MovieChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
