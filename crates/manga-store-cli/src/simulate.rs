use std::path::Path;

use manga_store_client::{Api, ClientConfig, Credentials, Error, Manga, MAX_SCORE, Transport};
use rand::Rng;
use rand::seq::IndexedRandom;

/// One email per line, blank lines and `#` comments are skipped
pub fn parse_users(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Score in `[3, 6)` capped at the maximum the store accepts
pub fn random_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(3.0..6.0_f64).min(MAX_SCORE)
}

async fn catalog<T: Transport>(api: &Api<T>) -> Result<Vec<Manga>, Error> {
    let (popular, newest) = futures::try_join!(api.popular_manga(), api.newest_manga())?;

    let mut catalog = popular;
    for manga in newest {
        if !catalog.iter().any(|m| m.id == manga.id) {
            catalog.push(manga);
        }
    }

    Ok(catalog)
}

async fn simulate_user<T: Transport>(
    api: &Api<T>,
    credentials: &Credentials,
) -> Result<String, Error> {
    api.login(credentials).await?;

    let catalog = catalog(api).await?;
    let (manga_id, score) = {
        let mut rng = rand::rng();
        let manga = catalog
            .choose(&mut rng)
            .ok_or_else(|| Error::InvalidInput("catalog is empty".to_string()))?;
        (manga.id.clone(), random_score(&mut rng))
    };

    let manga = api.manga(&manga_id).await?;
    debug!("{} viewed {}", credentials.email, manga.title);

    api.purchase(&manga_id).await?;
    api.rate(&manga_id, score).await?;

    Ok(manga.title)
}

pub async fn run(config: ClientConfig, users: &Path, password: &str) -> Result<(), anyhow::Error> {
    let content = tokio::fs::read_to_string(users).await?;
    let users = parse_users(&content);
    info!("simulating {} users against {}", users.len(), config.base_url);

    let mut completed = 0;
    for email in users {
        // each user gets its own cookie jar
        let api = Api::http(config.clone())?;
        let credentials = Credentials::new(email.clone(), password);

        match simulate_user(&api, &credentials).await {
            Ok(title) => {
                info!("user {} purchased and rated {}", email, title);
                completed += 1;
            }
            Err(e) => {
                warn!("user {} failed: {}", email, e);
                continue;
            }
        }
    }

    info!("{} users completed all actions", completed);

    Ok(())
}
