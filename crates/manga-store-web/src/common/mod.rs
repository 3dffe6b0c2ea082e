mod navbar;
pub use navbar::Navbar;

mod route;
pub use route::{Router, current_route, pathname_signal, route_signal};

mod cover;
pub use cover::Cover;

mod spinner;
pub use spinner::Spinner;

pub mod snackbar;
