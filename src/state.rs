use enroll_api::client::ApiClient;

use crate::session::SessionStore;

pub struct AppState {
    pub client: ApiClient,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(client: ApiClient, sessions: SessionStore) -> Self {
        AppState { client, sessions }
    }
}
