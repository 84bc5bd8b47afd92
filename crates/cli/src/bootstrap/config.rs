use ferrous_nslookup_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        server = %config.lookup.server,
        port = config.lookup.port,
        query_type = %config.lookup.query_type,
        recursion_desired = config.lookup.recursion_desired,
        "Configuration loaded"
    );

    Ok(config)
}
