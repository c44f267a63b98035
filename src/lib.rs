mod erased;
mod error;
pub mod fn_loader;
mod loadable;
mod result;
pub mod static_loader;

#[cfg(test)]
mod test;

pub use erased::{load_all, ErasedLoader};
pub use error::LoadError;
pub use loadable::Loadable;
pub use result::LoadResult;
