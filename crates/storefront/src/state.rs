use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    notification::Notifier,
};
use anyhow::{Context, Result};
use apiclient::{client::ApiClients, presence::PresenceClient};
use shared::config::Config;
use std::fmt;

/// Application-lifetime state: built at mount, the stores inside live until
/// logout or process exit.
#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub config: Config,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let clients =
            ApiClients::init(&config).context("Failed to initialize API clients")?;
        let presence = PresenceClient::new(&config);
        let notifier = Notifier::new();

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            clients,
            presence,
            notifier,
        });

        Ok(Self {
            di_container,
            config,
        })
    }
}
