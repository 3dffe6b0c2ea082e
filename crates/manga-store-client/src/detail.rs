//! Manga detail screen actions. Outcomes are returned as the text of a
//! blocking notification, the screen keeps no state about them.

use crate::api::Api;
use crate::transport::Transport;

pub async fn purchase<T: Transport>(api: &Api<T>, manga_id: &str) -> String {
    match api.purchase(manga_id).await {
        Ok(response) => response.message,
        Err(e) => format!("Error purchasing manga: {e}"),
    }
}

pub async fn rate<T: Transport>(api: &Api<T>, manga_id: &str, score: f64) -> String {
    match api.rate(manga_id, score).await {
        Ok(response) => response.message,
        Err(e) => format!("Error rating manga: {e}"),
    }
}
