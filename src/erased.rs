use std::sync::Arc;

use futures::{
    future::{join_all, BoxFuture},
    FutureExt,
};

use crate::{loadable::Loadable, result::LoadResult};

/// Object-safe forwarding layer. Only the item type survives here; the
/// concrete loader type is gone from the signature.
trait DynLoadable<T>: Send + Sync {
    fn load(&self) -> BoxFuture<'_, LoadResult<T>>;
}

struct LoadableBox<L>(L);

impl<T, L> DynLoadable<T> for LoadableBox<L>
where
    T: Send + 'static,
    L: Loadable<Item = T> + Send + Sync,
{
    fn load(&self) -> BoxFuture<'_, LoadResult<T>> {
        self.0.load().boxed()
    }
}

/// Uniform wrapper around any [`Loadable`] with item type `T`, so
/// heterogeneous loader types can live in one `Vec<ErasedLoader<T>>`.
///
/// The wrapper binds to a single underlying loader at construction and
/// forwards every `load` call to it unchanged.
pub struct ErasedLoader<T: 'static> {
    inner: Arc<dyn DynLoadable<T>>,
}

impl<T> ErasedLoader<T>
where
    T: Send + 'static,
{
    /// Erase `loadable`. The item types must line up, which the
    /// `Item = T` bound checks at compile time.
    pub fn new<L>(loadable: L) -> Self
    where
        L: Loadable<Item = T> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(LoadableBox(loadable)),
        }
    }

    /// Run the underlying loader. Pure delegation, the result is whatever
    /// the concrete loader produced.
    pub async fn load(&self) -> LoadResult<T> {
        self.inner.load().await
    }

    /// Like [`load`](Self::load), but delivers the result to `completion`.
    /// The handler is invoked exactly once.
    pub async fn load_with(&self, completion: impl FnOnce(LoadResult<T>)) {
        completion(self.inner.load().await);
    }

    /// Run the load on a background task and hand the result to
    /// `completion` from there. The caller keeps the wrapper; the spawned
    /// task shares the erased handle.
    pub fn load_detached(
        &self,
        completion: impl FnOnce(LoadResult<T>) + Send + 'static,
    ) -> tokio::task::JoinHandle<()> {
        let inner = self.inner.clone();
        tokio::spawn(async move {
            completion(inner.load().await);
        })
    }
}

// an erased loader is still a loader
impl<T> Loadable for ErasedLoader<T>
where
    T: Send + 'static,
{
    type Item = T;

    fn load(&self) -> impl std::future::Future<Output = LoadResult<T>> + std::marker::Send {
        self.inner.load()
    }
}

/// Drive every loader in the collection and collect the results in the
/// same order. Each element resolves independently.
pub async fn load_all<T>(loaders: &[ErasedLoader<T>]) -> Vec<LoadResult<T>>
where
    T: Send + 'static,
{
    join_all(loaders.iter().map(|l| l.load())).await
}
