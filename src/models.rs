use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::client::GithubOrgClient;
use crate::error::Result;
use crate::fetcher::JsonFetcher;
use crate::nested::access_nested_map;

/// Everything a report needs about one organization listing.
#[derive(Debug, Serialize)]
pub struct OrgReport {
    pub org: String,
    #[serde(skip)]
    pub display_name: Option<String>,
    #[serde(skip)]
    pub html_url: Option<String>,
    /// The license filter as given; `null` when listing everything.
    pub license: Option<Value>,
    /// Repositories returned by the server before filtering.
    pub total: usize,
    pub repos: Vec<String>,
    /// License key per repository name, for repositories that declare one.
    #[serde(skip)]
    pub license_keys: HashMap<String, String>,
}

impl OrgReport {
    pub fn collect<F: JsonFetcher>(
        client: &GithubOrgClient<F>,
        license: Option<&Value>,
    ) -> Result<Self> {
        let org = client.org()?;
        let text = |key: &str| org.get(key).and_then(Value::as_str).map(str::to_string);

        let repos = client.public_repos(license)?;
        let payload = client.repos_payload()?;

        let license_keys = payload
            .iter()
            .filter_map(|repo| {
                let name = access_nested_map(repo, &["name"]).ok()?.as_str()?;
                let key = access_nested_map(repo, &["license", "key"]).ok()?.as_str()?;
                Some((name.to_string(), key.to_string()))
            })
            .collect();

        Ok(Self {
            org: text("login").unwrap_or_else(|| client.org_name().to_string()),
            display_name: text("name"),
            html_url: text("html_url"),
            license: license.cloned(),
            total: payload.len(),
            repos,
            license_keys,
        })
    }

    pub fn license_of(&self, repo: &str) -> Option<&str> {
        self.license_keys.get(repo).map(String::as_str)
    }

    /// Filter rendered for humans: strings bare, anything else as JSON.
    pub fn license_label(&self) -> Option<String> {
        self.license.as_ref().map(|l| match l {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
