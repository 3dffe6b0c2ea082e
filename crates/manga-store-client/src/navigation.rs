use crate::route::Route;

/// Moves the app to another screen
pub trait Navigator {
    fn go_to(&self, route: &Route);
}
