use std::rc::Rc;

use futures::future::try_join_all;
use manga_store_lib::error::Error;
use manga_store_lib::models::{PurchaseDetail, User};

use crate::api::Api;
use crate::navigation::Navigator;
use crate::route::Route;
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    pub user: User,
    pub purchases: Vec<PurchaseDetail>,
}

/// Fetch the current user, then every purchased manga in parallel. A
/// single failed lookup fails the whole profile.
pub async fn fetch_profile<T: Transport>(api: &Api<T>) -> Result<ProfileData, Error> {
    let user = api.user().await?;

    let purchases = try_join_all(user.purchase_history.iter().cloned().map(|purchase| async move {
        let manga = api.manga(&purchase.manga_id).await?;
        Ok::<_, Error>(PurchaseDetail::merge(purchase, manga))
    }))
    .await?;

    Ok(ProfileData { user, purchases })
}

/// Click handler for a purchase card. Nothing happens until the returned
/// closure is called.
pub fn open_manga<N>(navigator: Rc<N>, manga_id: &str) -> impl Fn() + 'static
where
    N: Navigator + ?Sized + 'static,
{
    let route = Route::Manga(manga_id.to_string());
    move || navigator.go_to(&route)
}
