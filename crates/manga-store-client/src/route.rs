#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Home,
    Manga(String),
    Search,
    Profile,
    NotFound,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        match paths.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["home"] => Route::Home,
            ["manga", id] => Route::Manga(id.to_string()),
            ["search"] => Route::Search,
            ["profile"] => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/home".to_string(),
            Route::Manga(manga_id) => ["/manga".to_string(), manga_id.to_string()].join("/"),
            Route::Search => "/search".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
