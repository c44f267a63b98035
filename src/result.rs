use crate::error::LoadError;

/// Outcome of a single load: an ordered (possibly empty) batch of values,
/// or the error the underlying loader reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult<T> {
    Success(Vec<T>),
    Failure(LoadError),
}

impl<T> LoadResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LoadResult::Failure(_))
    }

    pub fn into_values(self) -> Option<Vec<T>> {
        match self {
            LoadResult::Success(values) => Some(values),
            LoadResult::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Vec<T>, LoadError> {
        match self {
            LoadResult::Success(values) => Ok(values),
            LoadResult::Failure(err) => Err(err),
        }
    }
}

impl<T> From<Result<Vec<T>, LoadError>> for LoadResult<T> {
    fn from(res: Result<Vec<T>, LoadError>) -> Self {
        match res {
            Ok(values) => LoadResult::Success(values),
            Err(err) => LoadResult::Failure(err),
        }
    }
}
