use super::{QuayModule, fetch_tags};
use crate::client::Transport;
use crate::error::Result;
use crate::outcome::ErrorLog;
use crate::query::TagQuery;
use crate::tag::Tag;

pub(super) const NAME: &str = "tag_list";

/// Lists tags in the order the registry returns them.
///
/// Every query key is part of the request mapping; absent parameters are
/// null and never reach the URL.
#[derive(Debug, Clone)]
pub struct TagList<T> {
    transport: T,
    query: TagQuery,
}

impl<T: Transport + Sync> TagList<T> {
    pub fn new(transport: T, query: TagQuery) -> Self {
        Self { transport, query }
    }
}

impl<T: Transport + Sync> QuayModule for TagList<T> {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, errors: &mut ErrorLog) -> Result<Option<Vec<Tag>>> {
        let query = self.query.dense();
        fetch_tags(&self.transport, &self.query, &query, errors).await
    }
}
