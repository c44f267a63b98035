use tracing::debug;

use crate::{loadable::Loadable, result::LoadResult};

/// Loader over a fixed in-memory batch. Always succeeds with a clone of
/// the data it was built with.
pub struct StaticLoader<T> {
    data: Vec<T>,
}

impl<T> StaticLoader<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Loadable for StaticLoader<T>
where
    T: Clone + Sync + Send,
{
    type Item = T;

    async fn load(&self) -> LoadResult<T> {
        debug!("anyload: staticloader: load {} values", self.data.len());

        LoadResult::Success(self.data.clone())
    }
}
