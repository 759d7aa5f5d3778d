use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, to_bson};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed genre set. Serializes as the plain variant name ("Action").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Thriller,
    Western,
}

impl FromStr for Genre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Genre::Action),
            "Adventure" => Ok(Genre::Adventure),
            "Comedy" => Ok(Genre::Comedy),
            "Drama" => Ok(Genre::Drama),
            "Fantasy" => Ok(Genre::Fantasy),
            "Horror" => Ok(Genre::Horror),
            "Mystery" => Ok(Genre::Mystery),
            "Thriller" => Ok(Genre::Thriller),
            "Western" => Ok(Genre::Western),
            _ => Err(()),
        }
    }
}

const GENRE_MESSAGE: &str = "Genre must be one of: Action, Adventure, Comedy, Drama, Fantasy, Horror, Mystery, Thriller, Western.";

const INCOMPLETE_MESSAGE: &str = "Please pass complete movie details, including title, yearReleased, genre, and at least one actor (including name and character).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub actor_name: String,
    pub character_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub year_released: i32,
    pub genre: Genre,
    pub actors: Vec<Actor>,
}

/// Create body. All fields optional so validation owns the 400, and genre is
/// a raw string so an unknown genre is a validation message rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub year_released: Option<i32>,
    pub genre: Option<String>,
    pub actors: Option<Vec<Actor>>,
}

impl CreateMovieRequest {
    /// Checks all four required fields, the genre set, and the non-empty
    /// actors rule, producing a ready-to-insert record.
    pub fn validate(self) -> Result<Movie, String> {
        let (Some(title), Some(year_released), Some(genre), Some(actors)) =
            (self.title, self.year_released, self.genre, self.actors)
        else {
            return Err(INCOMPLETE_MESSAGE.to_string());
        };

        if actors.is_empty() {
            return Err(INCOMPLETE_MESSAGE.to_string());
        }

        let genre = Genre::from_str(&genre).map_err(|_| GENRE_MESSAGE.to_string())?;

        Ok(Movie {
            id: None,
            title,
            year_released,
            genre,
            actors,
        })
    }
}

/// Update body for PUT. `_id` picks the record; every other field is merged
/// only when supplied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub year_released: Option<i32>,
    pub genre: Option<String>,
    pub actors: Option<Vec<Actor>>,
}

impl UpdateMovieRequest {
    /// Builds the `$set` document from the supplied fields only. An empty
    /// result means the caller sent nothing to change.
    pub fn changes(&self) -> Result<Document, String> {
        let mut set = Document::new();
        if let Some(title) = &self.title {
            set.insert("title", title.as_str());
        }
        if let Some(year) = self.year_released {
            set.insert("yearReleased", year);
        }
        if let Some(genre) = &self.genre {
            let genre = Genre::from_str(genre).map_err(|_| GENRE_MESSAGE.to_string())?;
            set.insert("genre", to_bson(&genre).map_err(|e| e.to_string())?);
        }
        if let Some(actors) = &self.actors {
            if actors.is_empty() {
                return Err(INCOMPLETE_MESSAGE.to_string());
            }
            set.insert("actors", to_bson(actors).map_err(|e| e.to_string())?);
        }
        Ok(set)
    }
}

/// Delete body for DELETE /movies, which addresses the record via `_id` in
/// the body rather than the path.
#[derive(Debug, Deserialize)]
pub struct DeleteMovieRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor {
            actor_name: "Timothee Chalamet".into(),
            character_name: "Paul Atreides".into(),
        }
    }

    #[test]
    fn create_rejects_missing_fields() {
        let req = CreateMovieRequest {
            title: Some("Dune".into()),
            year_released: Some(2021),
            genre: Some("Adventure".into()),
            actors: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_rejects_empty_actors() {
        let req = CreateMovieRequest {
            title: Some("Dune".into()),
            year_released: Some(2021),
            genre: Some("Adventure".into()),
            actors: Some(vec![]),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_rejects_unknown_genre() {
        let req = CreateMovieRequest {
            title: Some("Dune".into()),
            year_released: Some(2021),
            genre: Some("Space Opera".into()),
            actors: Some(vec![actor()]),
        };
        let err = req.validate().unwrap_err();
        assert!(err.contains("Genre must be one of"));
    }

    #[test]
    fn create_accepts_complete_payload() {
        let req = CreateMovieRequest {
            title: Some("Dune".into()),
            year_released: Some(2021),
            genre: Some("Adventure".into()),
            actors: Some(vec![actor()]),
        };
        let movie = req.validate().unwrap();
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.genre, Genre::Adventure);
        assert_eq!(movie.actors.len(), 1);
    }

    #[test]
    fn movie_uses_camel_case_on_the_wire() {
        let movie = Movie {
            id: None,
            title: "Dune".into(),
            year_released: 2021,
            genre: Genre::Adventure,
            actors: vec![actor()],
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["yearReleased"], 2021);
        assert_eq!(value["genre"], "Adventure");
        assert_eq!(value["actors"][0]["actorName"], "Timothee Chalamet");
        assert_eq!(value["actors"][0]["characterName"], "Paul Atreides");
    }

    #[test]
    fn update_changes_contain_only_supplied_fields() {
        let req = UpdateMovieRequest {
            id: Some("0123456789abcdef01234567".into()),
            title: None,
            year_released: Some(1984),
            genre: None,
            actors: None,
        };
        let set = req.changes().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_i32("yearReleased").unwrap(), 1984);
    }

    #[test]
    fn update_with_no_fields_is_empty() {
        let req = UpdateMovieRequest {
            id: Some("0123456789abcdef01234567".into()),
            title: None,
            year_released: None,
            genre: None,
            actors: None,
        };
        assert!(req.changes().unwrap().is_empty());
    }

    #[test]
    fn update_rejects_unknown_genre() {
        let req = UpdateMovieRequest {
            id: None,
            title: None,
            year_released: None,
            genre: Some("Musical".into()),
            actors: None,
        };
        assert!(req.changes().is_err());
    }

    #[test]
    fn genre_round_trips_through_from_str() {
        for name in [
            "Action",
            "Adventure",
            "Comedy",
            "Drama",
            "Fantasy",
            "Horror",
            "Mystery",
            "Thriller",
            "Western",
        ] {
            let genre = Genre::from_str(name).unwrap();
            assert_eq!(serde_json::to_value(genre).unwrap(), name);
        }
        assert!(Genre::from_str("Documentary").is_err());
    }
}
