use anyhow::anyhow;
use futures::FutureExt;

use crate::{
    fn_loader::FnLoader, static_loader::StaticLoader, LoadError, LoadResult, Loadable,
};

#[tokio::test]
async fn test_static_loader_empty_batch() {
    let loader = StaticLoader::<String>::new(vec![]);

    assert_eq!(loader.load().await, LoadResult::Success(vec![]));
}

#[tokio::test]
async fn test_fn_loader_success() {
    let loader = FnLoader::new(|| async { Ok(vec!["a".to_string(), "b".to_string()]) }.boxed());

    assert_eq!(
        loader.load().await,
        LoadResult::Success(vec!["a".to_string(), "b".to_string()])
    );
}

#[tokio::test]
async fn test_fn_loader_maps_error_to_message() {
    let loader = FnLoader::<i64>::new(|| async { Err(anyhow!("source unreachable")) }.boxed());

    assert_eq!(
        loader.load().await,
        LoadResult::Failure(LoadError::Message("source unreachable".to_string()))
    );
}

#[tokio::test]
async fn test_load_result_accessors() {
    let ok = LoadResult::Success(vec![1i64]);
    assert!(ok.is_success());
    assert_eq!(ok.into_values(), Some(vec![1]));

    let err = LoadResult::<i64>::Failure(LoadError::Failed);
    assert!(err.is_failure());
    assert_eq!(err.into_result(), Err(LoadError::Failed));
}
