use serde::{Deserialize, Serialize};

use super::Manga;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub manga_id: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub purchase_history: Vec<Purchase>,
}

/// A purchase history entry joined with the manga it refers to.
///
/// Where both records carry the same field the manga's value is kept, the
/// purchase only contributes its date.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDetail {
    pub manga_id: String,
    pub purchase_date: String,
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub manga: Manga,
}

impl PurchaseDetail {
    pub fn merge(purchase: Purchase, manga: Manga) -> Self {
        Self {
            manga_id: purchase.manga_id,
            purchase_date: purchase.purchase_date,
            title: manga.title.clone(),
            price: manga.price,
            image_url: manga.image_url.clone(),
            manga,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_str(
            r#"{"email":"a@b.c","purchaseHistory":[{"mangaId":"1","purchaseDate":"2024-11-02"}]}"#,
        )
        .unwrap();

        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.purchase_history.len(), 1);
        assert_eq!(user.purchase_history[0].manga_id, "1");
        assert_eq!(user.purchase_history[0].title, None);
    }

    #[test]
    fn test_deserialize_null_purchase_history() {
        let user: User =
            serde_json::from_str(r#"{"email":"new@b.c","purchaseHistory":null}"#).unwrap();

        assert_eq!(user.email, "new@b.c");
        assert!(user.purchase_history.is_empty());
    }

    #[test]
    fn test_merge_prefers_manga_fields() {
        let purchase = Purchase {
            manga_id: "7".to_string(),
            purchase_date: "2024-11-02".to_string(),
            title: Some("Old title".to_string()),
            price: Some(1.0),
        };
        let manga = Manga {
            id: "7".to_string(),
            title: "Vagabond".to_string(),
            price: 12.0,
            image_url: "v.png".to_string(),
            ..Default::default()
        };

        let detail = PurchaseDetail::merge(purchase, manga);

        assert_eq!(detail.title, "Vagabond");
        assert_eq!(detail.price, 12.0);
        assert_eq!(detail.purchase_date, "2024-11-02");
        assert_eq!(detail.manga_id, "7");
    }
}
