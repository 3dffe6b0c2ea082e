#[macro_use]
extern crate log;

mod commands;
mod config;
mod simulate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about = "Command line client for the Manga Store API")]
struct Opts {
    /// YAML file with `base_url`
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Overrides the configured API url
    #[clap(long)]
    api_url: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Args, Clone)]
pub struct Login {
    #[clap(long)]
    email: String,
    #[clap(long)]
    password: String,
}

#[derive(Subcommand)]
enum Command {
    /// Show the home feed sections
    Home {
        #[clap(flatten)]
        login: Login,
    },
    /// Show one manga
    Manga {
        id: String,
        #[clap(flatten)]
        login: Login,
    },
    Search {
        #[clap(long, default_value = "")]
        query: String,
        /// Comma separated genres
        #[clap(long, default_value = "")]
        genres: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long, default_value = "10")]
        limit: String,
    },
    Purchase {
        id: String,
        #[clap(flatten)]
        login: Login,
    },
    Rate {
        id: String,
        score: String,
        #[clap(flatten)]
        login: Login,
    },
    /// Show the user and the purchase history
    Profile {
        #[clap(flatten)]
        login: Login,
    },
    /// Log in every user from a file, then fetch, purchase and rate a random manga
    Simulate {
        /// File with one email per line
        #[clap(long)]
        users: PathBuf,
        #[clap(long, default_value = "12345678")]
        password: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    let mut config = config::load(opts.config.as_deref())?;
    if let Some(api_url) = opts.api_url {
        config.base_url = api_url;
    }

    match opts.subcmd {
        Command::Home { login } => commands::home(config, login).await?,
        Command::Manga { id, login } => commands::manga(config, login, &id).await?,
        Command::Search {
            query,
            genres,
            author,
            limit,
        } => commands::search(config, query, &genres, author, &limit).await?,
        Command::Purchase { id, login } => commands::purchase(config, login, &id).await?,
        Command::Rate { id, score, login } => commands::rate(config, login, &id, &score).await?,
        Command::Profile { login } => commands::profile(config, login).await?,
        Command::Simulate { users, password } => simulate::run(config, &users, &password).await?,
    }

    Ok(())
}
