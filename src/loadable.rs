use crate::result::LoadResult;

/// The capability "can asynchronously load a batch of `Item` values".
///
/// The returned future resolves exactly once; whether it completes
/// immediately or after real work is up to the implementation. Not object
/// safe on purpose, erase through [`crate::ErasedLoader`] to store
/// differently-typed implementations together.
pub trait Loadable {
    type Item;

    fn load(
        &self,
    ) -> impl std::future::Future<Output = LoadResult<Self::Item>> + std::marker::Send;
}
