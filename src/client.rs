//! Client for a single GitHub organization.
//!
//! Each accessor derives its value from at most one request. The organization
//! record and the repository listing are memoized per client instance; the
//! repository URL is always read back out of the memoized organization record.

use std::cell::OnceCell;

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::fetcher::JsonFetcher;
use crate::nested::access_nested_map;

/// Public GitHub REST API root.
pub const GITHUB_API_URL: &str = "https://api.github.com";

pub struct GithubOrgClient<F> {
    org_name: String,
    api_base: String,
    fetcher: F,
    org: OnceCell<Value>,
    repos_payload: OnceCell<Vec<Value>>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: GITHUB_API_URL.to_string(),
            fetcher,
            org: OnceCell::new(),
            repos_payload: OnceCell::new(),
        }
    }

    /// Point the client at another API root (GitHub Enterprise, a test server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let mut base = api_base.into();
        while base.ends_with('/') {
            base.pop();
        }
        self.api_base = base;
        self
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_base, self.org_name)
    }

    /// The organization record. Fetched on first access.
    pub fn org(&self) -> Result<&Value> {
        if let Some(org) = self.org.get() {
            return Ok(org);
        }
        let org = self.fetcher.fetch_json(&self.org_url())?;
        Ok(self.org.get_or_init(|| org))
    }

    /// The `repos_url` field of [`org`](Self::org).
    pub fn repos_url(&self) -> Result<&str> {
        access_nested_map(self.org()?, &["repos_url"])?
            .as_str()
            .ok_or_else(|| ClientError::WrongType {
                field: "repos_url".to_string(),
                expected: "a string",
            })
    }

    /// Repository records in server order. Fetched on first access.
    pub fn repos_payload(&self) -> Result<&[Value]> {
        if let Some(repos) = self.repos_payload.get() {
            return Ok(repos);
        }

        let repos = match self.fetcher.fetch_json(self.repos_url()?)? {
            Value::Array(repos) => repos,
            _ => {
                return Err(ClientError::WrongType {
                    field: "repos".to_string(),
                    expected: "an array",
                })
            }
        };

        Ok(self.repos_payload.get_or_init(|| repos))
    }

    /// Names of the organization's repositories, optionally restricted to one
    /// license key.
    ///
    /// `None` lists every repository. A filter that is not a JSON string
    /// matches nothing.
    pub fn public_repos(&self, license: Option<&Value>) -> Result<Vec<String>> {
        self.repos_payload()?
            .iter()
            .filter(|repo| {
                license.map_or(true, |filter| {
                    filter
                        .as_str()
                        .is_some_and(|license_key| has_license(repo, license_key))
                })
            })
            .map(|repo| repo_name(repo).map(str::to_string))
            .collect()
    }
}

/// Whether `repo.license.key` equals `license_key`. A repository without a
/// license never matches.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    access_nested_map(repo, &["license", "key"])
        .map(|key| key.as_str() == Some(license_key))
        .unwrap_or(false)
}

fn repo_name(repo: &Value) -> Result<&str> {
    access_nested_map(repo, &["name"])?
        .as_str()
        .ok_or_else(|| ClientError::WrongType {
            field: "name".to_string(),
            expected: "a string",
        })
}
