use serde::{Deserialize, Deserializer};

pub mod manga;
pub use manga::*;

pub mod user;
pub use user::*;

pub mod request;
pub use request::*;

/// The store server encodes empty lists as `null`
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
