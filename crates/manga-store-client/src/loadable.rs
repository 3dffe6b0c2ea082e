use manga_store_lib::error::Error;

/// View state of a screen that loads data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, Error>> for Loadable<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => Loadable::Ready(data),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}
