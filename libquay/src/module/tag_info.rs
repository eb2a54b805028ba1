use super::{QuayModule, fetch_tags};
use crate::client::Transport;
use crate::error::Result;
use crate::outcome::ErrorLog;
use crate::query::{LimitMapping, TagQuery};
use crate::tag::{Tag, sort_newest_first};

pub(super) const NAME: &str = "tag_info";

/// Lists tags newest first.
///
/// Only supplied parameters are sent to the registry. Tags are ordered by
/// `start_ts` descending; tags sharing a timestamp keep registry order.
#[derive(Debug, Clone)]
pub struct TagInfo<T> {
    transport: T,
    query: TagQuery,
    limit_mapping: LimitMapping,
}

impl<T: Transport + Sync> TagInfo<T> {
    pub fn new(transport: T, query: TagQuery) -> Self {
        Self {
            transport,
            query,
            limit_mapping: LimitMapping::default(),
        }
    }

    pub fn with_limit_mapping(mut self, limit_mapping: LimitMapping) -> Self {
        self.limit_mapping = limit_mapping;
        self
    }
}

impl<T: Transport + Sync> QuayModule for TagInfo<T> {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, errors: &mut ErrorLog) -> Result<Option<Vec<Tag>>> {
        let query = self.query.sparse(self.limit_mapping);
        let mut tags = fetch_tags(&self.transport, &self.query, &query, errors).await?;

        if let Some(tags) = tags.as_mut() {
            sort_newest_first(tags);
        }

        Ok(tags)
    }
}
