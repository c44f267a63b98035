use anyhow::Result;
use futures::future::BoxFuture;
use tracing::{debug, error};

use crate::{loadable::Loadable, result::LoadResult};

type LoadFn<T> = Box<dyn Fn() -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync>;

/// Loader backed by an async closure, for sources that do not warrant a
/// dedicated type. A closure error surfaces as
/// [`LoadError::Message`](crate::LoadError::Message).
pub struct FnLoader<T> {
    f: LoadFn<T>,
}

impl<T> FnLoader<T> {
    pub fn new(
        f: impl Fn() -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync + 'static,
    ) -> Self {
        Self { f: Box::new(f) }
    }
}

impl<T> Loadable for FnLoader<T>
where
    T: Send + Sync,
{
    type Item = T;

    async fn load(&self) -> LoadResult<T> {
        match (self.f)().await {
            Ok(values) => {
                debug!("anyload: fnloader: loaded {} values", values.len());
                LoadResult::Success(values)
            }
            Err(err) => {
                error!("anyload: fnloader: load failed, error: {err:#}");
                LoadResult::Failure(err.into())
            }
        }
    }
}
