use workflow::PredictError;

/// API fetch state for page-local data loads (the dataset previews). The
/// prediction workflow itself lives in the session reducer, not here.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(PredictError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PredictError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}
