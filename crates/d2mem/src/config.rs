use std::time::Duration;

/// Refresh intervals for the cached snapshot categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Minimum age before monsters are decoded again
    pub monsters_ttl: Duration,
    /// Minimum age before world objects are decoded again
    pub objects_ttl: Duration,
    /// Minimum age before the inventory is decoded again; hovering an item
    /// always forces a refresh
    pub inventory_ttl: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            monsters_ttl: Duration::from_millis(200),
            objects_ttl: Duration::from_millis(200),
            inventory_ttl: Duration::from_millis(500),
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration builder
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for ReaderConfig
#[derive(Debug, Clone, Default)]
pub struct ReaderConfigBuilder {
    monsters_ttl: Option<Duration>,
    objects_ttl: Option<Duration>,
    inventory_ttl: Option<Duration>,
}

impl ReaderConfigBuilder {
    pub fn monsters_ttl(mut self, ttl: Duration) -> Self {
        self.monsters_ttl = Some(ttl);
        self
    }

    pub fn objects_ttl(mut self, ttl: Duration) -> Self {
        self.objects_ttl = Some(ttl);
        self
    }

    pub fn inventory_ttl(mut self, ttl: Duration) -> Self {
        self.inventory_ttl = Some(ttl);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReaderConfig {
        let default = ReaderConfig::default();
        ReaderConfig {
            monsters_ttl: self.monsters_ttl.unwrap_or(default.monsters_ttl),
            objects_ttl: self.objects_ttl.unwrap_or(default.objects_ttl),
            inventory_ttl: self.inventory_ttl.unwrap_or(default.inventory_ttl),
        }
    }
}
