use serde::{Deserialize, Serialize};

/// A catalog item as served by the store API
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manga {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, alias = "averageRating")]
    pub rating: f64,
}

impl Manga {
    pub fn genres_label(&self) -> String {
        self.genres.join(", ")
    }

    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Server acknowledgement for purchase and rating actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body, the store API reports failures as `{"error": ...}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_manga_with_defaults() {
        let manga: Manga = serde_json::from_str(r#"{"id":"42","title":"Berserk"}"#).unwrap();

        assert_eq!(manga.id, "42");
        assert_eq!(manga.title, "Berserk");
        assert!(manga.genres.is_empty());
        assert_eq!(manga.rating, 0.0);
    }

    #[test]
    fn test_deserialize_average_rating_alias() {
        let manga: Manga = serde_json::from_str(
            r#"{"id":"1","title":"Monster","price":9.5,"imageUrl":"m.png","genres":["Thriller","Drama"],"averageRating":4.5}"#,
        )
        .unwrap();

        assert_eq!(manga.rating, 4.5);
        assert_eq!(manga.image_url, "m.png");
        assert_eq!(manga.genres_label(), "Thriller, Drama");
        assert_eq!(manga.price_label(), "$9.5");
    }

    #[test]
    fn test_deserialize_null_genres() {
        let manga: Manga =
            serde_json::from_str(r#"{"id":"1","title":"Pluto","genres":null,"rating":3}"#).unwrap();

        assert!(manga.genres.is_empty());
        assert_eq!(manga.genres_label(), "");
        assert_eq!(manga.rating, 3.0);
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Invalid manga id","message":"ignored"}"#).unwrap();
        assert_eq!(body.into_message(), Some("Invalid manga id".to_string()));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Failed"}"#).unwrap();
        assert_eq!(body.into_message(), Some("Failed".to_string()));
    }
}
