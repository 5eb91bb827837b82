// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    BestCustomerSellerParams, Config, CustomerRetentionParams, HighestAverageProfitParams,
    LargestSingleSaleParams, ProfitRankParams, ReportSettings, RuleSettings, StableGrowthParams,
};

/// Loads the pipeline configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, and returns it. Callers that do not ship a file can fall back to
/// `Config::default()`, which carries the documented rule parameters.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;
    Ok(config)
}

/// Rejects parameter combinations the rules cannot work with.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.report.top_products == 0 {
        return Err(ConfigError::ValidationError(
            "report.top_products must be at least 1".to_string(),
        ));
    }
    if config.rules.stable_growth.tolerance < 0.0 {
        return Err(ConfigError::ValidationError(
            "rules.stable_growth.tolerance must be non-negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_config_carries_documented_parameters() {
        let config = Config::default();
        assert_eq!(config.report.top_products, 10);
        assert_eq!(config.rules.customer_retention.fixed_bonus, dec!(1000));
        assert_eq!(config.rules.stable_growth.bonus_pct, dec!(0.15));
        assert_eq!(config.rules.stable_growth.tolerance, 0.05);
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn zero_top_products_is_rejected() {
        let mut config = Config::default();
        config.report.top_products = 0;
        assert!(validate(&config).is_err());
    }
}
