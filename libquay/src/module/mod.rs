//! Tag listing modules and their entry point.
//!
//! Each module implements [`QuayModule`] on top of an injected
//! [`Transport`]. [`invoke`] runs a module once and maps what happened onto
//! an [`Outcome`]:
//!
//! - tags fetched, nothing recorded: success
//! - tags fetched, errors recorded: failure carrying the partial tags
//! - tags unavailable: failure with the first recorded error as message
//! - error raised: failure with the error text as message

use crate::client::{Client, ClientConfig, Method, Transport};
use crate::config::Config;
use crate::error::{QuayError, Result};
use crate::outcome::{ErrorLog, FAILURES_OCCURRED, Outcome};
use crate::query::{LimitMapping, Query, TagQuery};
use crate::tag::{ApiError, Tag, TagPage};
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

mod args;
mod tag_info;
mod tag_list;

pub use tag_info::TagInfo;
pub use tag_list::TagList;


/// A single read-only operation against the registry.
pub trait QuayModule {
    /// Name the automation caller knows the module by.
    fn name(&self) -> &'static str;

    /// Runs the operation once.
    ///
    /// Returns `Ok(None)` when the tag list could not be obtained; the
    /// reason is in `errors`.
    fn run(&self, errors: &mut ErrorLog) -> impl Future<Output = Result<Option<Vec<Tag>>>> + Send;
}

/// Runs `module` and builds its outcome.
pub async fn invoke<M: QuayModule>(module: &M) -> Outcome {
    let mut errors = ErrorLog::new();
    let result = module.run(&mut errors).await;

    match result {
        Ok(Some(tags)) if errors.is_empty() => Outcome::success(tags),
        Ok(Some(tags)) => Outcome::failure(FAILURES_OCCURRED, errors, Some(tags)),
        Ok(None) => {
            let msg = errors.first().unwrap_or(FAILURES_OCCURRED).to_string();
            Outcome::failure(msg, errors, None)
        }
        Err(e) => {
            tracing::error!(module = module.name(), "{}", e);
            Outcome::failure(e.to_string(), errors, None)
        }
    }
}

/// Fetches one page of tags for `tag_query` using the already mapped `query`.
///
/// A non-200 answer is recorded in `errors`. Its body is still parsed so
/// any tags it carries are returned as partial data.
pub(crate) async fn fetch_tags<T>(
    transport: &T,
    tag_query: &TagQuery,
    query: &Query,
    errors: &mut ErrorLog,
) -> Result<Option<Vec<Tag>>>
where
    T: Transport + Sync,
{
    tag_query.validate()?;

    let response = transport
        .request(Method::GET, &tag_query.path(), query)
        .await?;

    if !response.is_ok() {
        errors.record(format!(
            "Cannot fetch repository tags for {}",
            tag_query.repository
        ));
        if let Some(detail) = ApiError::message_from(&response.body) {
            errors.record(format!("Quay returned HTTP {}: {}", response.status, detail));
        }
        return Ok(TagPage::from_json(&response.body).ok().map(|page| page.tags));
    }

    let page = TagPage::from_json(&response.body)?;
    tracing::debug!(
        repository = %tag_query.repository,
        count = page.tags.len(),
        page = ?page.page,
        has_additional = ?page.has_additional,
        "fetched tags"
    );

    Ok(Some(page.tags))
}

/// The tag modules a caller can select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Tags sorted newest first
    TagInfo,
    /// Tags in registry order
    TagList,
}

impl ModuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModuleKind::TagInfo => tag_info::NAME,
            ModuleKind::TagList => tag_list::NAME,
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleKind {
    type Err = QuayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            tag_info::NAME => Ok(ModuleKind::TagInfo),
            tag_list::NAME => Ok(ModuleKind::TagList),
            other => Err(QuayError::params(format!("unknown module '{}'", other))),
        }
    }
}

/// Parameters an automation caller passes to a tag module.
///
/// Unknown keys (such as Ansible's `_ansible_*` internals) are ignored.
/// Integer and boolean values may also arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleParams {
    pub repository: String,
    #[serde(default, deserialize_with = "args::boolean")]
    pub only_active_tags: Option<bool>,
    #[serde(default, deserialize_with = "args::int")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "args::int")]
    pub limit: Option<i64>,
    #[serde(default)]
    pub specific_tag: Option<String>,
    #[serde(default)]
    pub quay_url: Option<String>,
    #[serde(default, deserialize_with = "args::int")]
    pub timeout: Option<u64>,
    #[serde(default, deserialize_with = "args::boolean")]
    pub legacy_limit: Option<bool>,
}

impl ModuleParams {
    /// Parses the JSON args file written by the automation caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::module::ModuleParams;
    ///
    /// let params = ModuleParams::from_json(r#"{"repository": "acme/widgets", "page": 2}"#).unwrap();
    /// assert_eq!(params.page, Some(2));
    ///
    /// assert!(ModuleParams::from_json(r#"{"page": 2}"#).is_err());
    /// ```
    pub fn from_json(args: &str) -> Result<Self> {
        serde_json::from_str(args).map_err(|e| QuayError::params(e.to_string()))
    }

    pub fn tag_query(&self) -> TagQuery {
        TagQuery {
            repository: self.repository.clone(),
            only_active_tags: self.only_active_tags,
            page: self.page,
            limit: self.limit,
            specific_tag: self.specific_tag.clone(),
        }
    }

    /// Endpoint configuration, parameters taking precedence over `config`.
    pub fn client_config(&self, config: &Config) -> ClientConfig {
        let defaults = config.client_config();
        ClientConfig {
            base_url: self.quay_url.clone().unwrap_or(defaults.base_url),
            timeout_seconds: self.timeout.unwrap_or(defaults.timeout_seconds),
        }
    }

    pub fn limit_mapping(&self, config: &Config) -> LimitMapping {
        match self.legacy_limit {
            Some(true) => LimitMapping::Legacy,
            Some(false) => LimitMapping::Limit,
            None => config.limit_mapping(),
        }
    }
}

/// Builds the HTTP client and runs the selected module.
///
/// Problems building the client become a failure outcome, so this never
/// fails outright.
pub async fn run_module(kind: ModuleKind, params: &ModuleParams, config: &Config) -> Outcome {
    let client = match Client::with_config(params.client_config(config)) {
        Ok(client) => client,
        Err(e) => return Outcome::failure(e.to_string(), ErrorLog::new(), None),
    };
    tracing::info!(module = %kind, repository = %params.repository, url = client.base_url(), "running module");

    match kind {
        ModuleKind::TagInfo => {
            let module = TagInfo::new(client, params.tag_query())
                .with_limit_mapping(params.limit_mapping(config));
            invoke(&module).await
        }
        ModuleKind::TagList => invoke(&TagList::new(client, params.tag_query())).await,
    }
}
