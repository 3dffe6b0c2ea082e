use futures::try_join;
use manga_store_lib::error::Error;
use manga_store_lib::models::Manga;

use crate::api::Api;
use crate::transport::Transport;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub popular: Vec<Manga>,
    pub recommended: Vec<Manga>,
    pub similar_taste: Vec<Manga>,
    pub newest: Vec<Manga>,
}

pub struct Section<'a> {
    pub title: &'static str,
    pub manga: &'a [Manga],
}

impl HomeFeed {
    /// Sections in display order. The same manga may show up in more than
    /// one section.
    pub fn sections(&self) -> [Section<'_>; 4] {
        [
            Section {
                title: "Popular Manga",
                manga: &self.popular,
            },
            Section {
                title: "Personalized Recommendations",
                manga: &self.recommended,
            },
            Section {
                title: "Users Similar to You Like",
                manga: &self.similar_taste,
            },
            Section {
                title: "Newest Manga",
                manga: &self.newest,
            },
        ]
    }
}

/// Fetch all four sections at once. One failed section fails the feed.
pub async fn fetch_feed<T: Transport>(api: &Api<T>) -> Result<HomeFeed, Error> {
    let (popular, recommended, similar_taste, newest) = try_join!(
        api.popular_manga(),
        api.recommendations_by_preferences(),
        api.recommendations_by_similar_users(),
        api.newest_manga(),
    )?;

    Ok(HomeFeed {
        popular,
        recommended,
        similar_taste,
        newest,
    })
}

#[cfg(test)]
mod test {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::loadable::Loadable;
    use crate::testing::{MockTransport, mock_api};

    fn transport() -> MockTransport {
        MockTransport::new()
            .on(
                Method::GET,
                "/manga/popular",
                200,
                json!([{"id": "1", "title": "Berserk"}, {"id": "2", "title": "Monster"}]),
            )
            .on(
                Method::GET,
                "/user/recs/preferences",
                200,
                json!([{"id": "2", "title": "Monster"}]),
            )
            .on(
                Method::GET,
                "/user/recs/similar_users",
                200,
                json!([{"id": "3", "title": "Vagabond"}]),
            )
    }

    #[tokio::test]
    async fn test_fetch_feed() {
        let api = mock_api(transport().on(
            Method::GET,
            "/manga",
            200,
            json!([{"id": "4", "title": "Pluto"}]),
        ));

        let feed = fetch_feed(&api).await.unwrap();

        assert_eq!(feed.popular.len(), 2);
        assert_eq!(feed.recommended[0].title, "Monster");
        assert_eq!(feed.similar_taste[0].title, "Vagabond");
        assert_eq!(feed.newest[0].title, "Pluto");

        let titles = feed.sections().map(|section| section.title);
        assert_eq!(
            titles,
            [
                "Popular Manga",
                "Personalized Recommendations",
                "Users Similar to You Like",
                "Newest Manga"
            ]
        );
        // no de-duplication across sections
        assert_eq!(feed.popular[1], feed.recommended[0]);
    }

    #[tokio::test]
    async fn test_null_lists_and_genres() {
        let api = mock_api(
            transport()
                .on_text(Method::GET, "/user/recs/similar_users", 200, "null")
                .on(
                    Method::GET,
                    "/manga",
                    200,
                    json!([{"id": "5", "title": "Dorohedoro", "genres": null}]),
                ),
        );

        let feed = fetch_feed(&api).await.unwrap();

        assert!(feed.similar_taste.is_empty());
        assert!(feed.newest[0].genres.is_empty());
        assert_eq!(feed.popular.len(), 2);
    }

    #[tokio::test]
    async fn test_one_failed_section_fails_feed() {
        let api = mock_api(transport().on(
            Method::GET,
            "/manga",
            500,
            json!({"error": "Failed to get newest manga"}),
        ));

        let state: Loadable<HomeFeed> = fetch_feed(&api).await.into();

        assert_eq!(state.error(), Some("Failed to get newest manga"));
        assert!(state.ready().is_none());
    }
}
