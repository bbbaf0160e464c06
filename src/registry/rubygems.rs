//! RubyGems Registry adapter
//!
//! Looks up gem metadata on RubyGems.
//! API endpoint: https://rubygems.org/api/v1/gems/{gem}.json

use crate::error::RegistryError;
use crate::registry::{GemInfo, GemRegistry, HttpClient};
use async_trait::async_trait;
use serde::Deserialize;

/// RubyGems gem metadata endpoint
pub const RUBYGEMS_API_URL: &str = "https://rubygems.org/api/v1/gems";

/// RubyGems gem metadata response
///
/// RubyGems publishes the summary under `info`; `description` is honoured
/// when a mirror provides it.
#[derive(Debug, Deserialize)]
struct GemResponse {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    info: Option<String>,
}

impl From<GemResponse> for GemInfo {
    fn from(response: GemResponse) -> Self {
        let non_blank = |d: &String| !d.trim().is_empty();
        let description = response
            .description
            .filter(non_blank)
            .or(response.info.filter(non_blank));
        GemInfo::new(response.name, description)
    }
}

/// RubyGems Registry adapter
pub struct RubyGemsAdapter {
    client: HttpClient,
    base_url: String,
}

impl RubyGemsAdapter {
    /// Create a RubyGems adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build the URL for a gem
    fn build_url(&self, gem: &str) -> String {
        format!("{}/{}.json", self.base_url, gem)
    }
}

#[async_trait]
impl GemRegistry for RubyGemsAdapter {
    fn registry_name(&self) -> &'static str {
        "RubyGems"
    }

    async fn fetch_gem(&self, name: &str) -> Result<GemInfo, RegistryError> {
        let url = self.build_url(name);
        let response: GemResponse = self
            .client
            .get_json(&url, name, self.registry_name())
            .await?;
        Ok(response.into())
    }
}
