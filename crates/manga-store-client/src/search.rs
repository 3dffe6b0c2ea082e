use std::cell::Cell;

use manga_store_lib::error::Error;
use manga_store_lib::input::{DEFAULT_SEARCH_LIMIT, join_genres, parse_genres, parse_limit};
use manga_store_lib::models::{Manga, SearchRequest};

use crate::api::Api;
use crate::loadable::Loadable;
use crate::transport::Transport;

/// Raw search form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub genres: Vec<String>,
    pub author: String,
    pub limit: i64,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            genres: vec![],
            author: String::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchForm {
    pub fn set_genres(&mut self, value: &str) {
        self.genres = parse_genres(value);
    }

    pub fn genres_field(&self) -> String {
        join_genres(&self.genres)
    }

    pub fn set_limit(&mut self, value: &str) {
        self.limit = parse_limit(value);
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            genres: self.genres.clone(),
            author: self.author.clone(),
            limit: self.limit,
        }
    }
}

/// Orders searches so that only the latest one issued may publish.
#[derive(Default)]
pub struct SearchSequence {
    latest: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchSequence {
    pub fn issue(&self) -> SearchTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        SearchTicket(next)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

fn search_error(e: Error) -> String {
    match e {
        Error::Server { message, .. } => message,
        _ => "Error performing search".to_string(),
    }
}

/// Run a search. Returns `None` when a newer search was issued while this
/// one was in flight.
pub async fn run<T: Transport>(
    api: &Api<T>,
    sequence: &SearchSequence,
    form: &SearchForm,
) -> Option<Loadable<Vec<Manga>>> {
    let ticket = sequence.issue();
    let result = api.search(&form.to_request()).await;

    if !sequence.is_current(ticket) {
        debug!("search {ticket:?} superseded");
        return None;
    }

    Some(match result {
        Ok(results) => Loadable::Ready(results),
        Err(e) => Loadable::Failed(search_error(e)),
    })
}
