pub use crate::error::Error;
pub use crate::input::{
    DEFAULT_SEARCH_LIMIT, MAX_SCORE, MIN_SCORE, clamp_score, join_genres, parse_genres,
    parse_limit, parse_score, validate_email, validate_password,
};
pub use crate::models::*;
