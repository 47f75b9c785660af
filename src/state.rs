use crate::store::CatFactStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: CatFactStore,
}
