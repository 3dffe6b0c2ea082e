use manga_store_client::home::fetch_feed;
use manga_store_client::profile::fetch_profile;
use manga_store_client::search::SearchForm;
use manga_store_client::{Api, ClientConfig, Credentials, HttpTransport, Manga, detail};

use crate::Login;

async fn login(config: ClientConfig, login: Login) -> Result<Api<HttpTransport>, anyhow::Error> {
    let api = Api::http(config)?;
    api.login(&Credentials::new(login.email, login.password)).await?;
    Ok(api)
}

fn print_manga(manga: &[Manga]) {
    if manga.is_empty() {
        println!("  (none)");
    }
    for manga in manga {
        println!("  [{}] {} by {} {}", manga.id, manga.title, manga.author, manga.price_label());
    }
}

pub async fn home(config: ClientConfig, credentials: Login) -> Result<(), anyhow::Error> {
    let api = login(config, credentials).await?;
    let feed = fetch_feed(&api).await?;
    for section in feed.sections() {
        println!("{}", section.title);
        print_manga(section.manga);
    }

    Ok(())
}

pub async fn manga(config: ClientConfig, credentials: Login, id: &str) -> Result<(), anyhow::Error> {
    let api = login(config, credentials).await?;
    let manga = api.manga(id).await?;
    println!("{}", serde_json::to_string_pretty(&manga)?);

    Ok(())
}

pub async fn search(
    config: ClientConfig,
    query: String,
    genres: &str,
    author: String,
    limit: &str,
) -> Result<(), anyhow::Error> {
    let api = Api::http(config)?;

    let mut form = SearchForm {
        query,
        author,
        ..Default::default()
    };
    form.set_genres(genres);
    form.set_limit(limit);

    let results = api.search(&form.to_request()).await?;
    info!("found {} manga", results.len());
    print_manga(&results);

    Ok(())
}

pub async fn purchase(config: ClientConfig, credentials: Login, id: &str) -> Result<(), anyhow::Error> {
    let api = login(config, credentials).await?;
    println!("{}", detail::purchase(&api, id).await);

    Ok(())
}

pub async fn rate(
    config: ClientConfig,
    credentials: Login,
    id: &str,
    score: &str,
) -> Result<(), anyhow::Error> {
    let api = login(config, credentials).await?;
    let score = manga_store_client::parse_score(score);
    println!("{}", detail::rate(&api, id, score).await);

    Ok(())
}

pub async fn profile(config: ClientConfig, credentials: Login) -> Result<(), anyhow::Error> {
    let api = login(config, credentials).await?;
    let profile = fetch_profile(&api).await?;

    println!("Email: {}", profile.user.email);
    if profile.purchases.is_empty() {
        println!("No purchases found.");
    }
    for purchase in &profile.purchases {
        println!(
            "  [{}] {} ${} purchased on {}",
            purchase.manga_id, purchase.title, purchase.price, purchase.purchase_date
        );
    }

    Ok(())
}
