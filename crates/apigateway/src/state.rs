use crate::di::DependenciesInject;
use anyhow::Result;
use shared::config::Config;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let di_container = DependenciesInject::new(config);

        Ok(Self { di_container })
    }
}
