// src/state.rs

use axum::extract::FromRef;

use crate::{config::Config, upstream::SharedSource};

#[derive(Clone)]
pub struct AppState {
    pub source: SharedSource,
    pub config: Config,
}

impl FromRef<AppState> for SharedSource {
    fn from_ref(state: &AppState) -> Self {
        state.source.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
