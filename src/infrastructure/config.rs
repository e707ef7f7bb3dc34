use serde::Deserialize;

pub const DEFAULT_GRAFANA_URL: &str = "http://localhost:3000";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

#[derive(Clone, Deserialize)]
pub struct GrafanaConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

// Keeps the password out of logs.
impl std::fmt::Debug for GrafanaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrafanaConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Defaults, then the optional `config/grafana` file, then `GRAFANA_URL`,
/// `GRAFANA_USER` and `GRAFANA_PASSWORD`.
pub fn load_grafana_config() -> anyhow::Result<GrafanaConfig> {
    grafana_config_from(config::Environment::with_prefix("GRAFANA"))
}

fn grafana_config_from(environment: config::Environment) -> anyhow::Result<GrafanaConfig> {
    let settings = config::Config::builder()
        .set_default("url", DEFAULT_GRAFANA_URL)?
        .set_default("user", DEFAULT_USERNAME)?
        .set_default("password", DEFAULT_PASSWORD)?
        .add_source(config::File::with_name("config/grafana").required(false))
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}
