//! View State
//!
//! Lifecycle of the single screen: `Unloaded` until the fetch settles,
//! then `Loaded` for the rest of the session, or `Failed` until the
//! user asks for another attempt.

use crate::error::FetchError;
use crate::models::QueryResult;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Fetch in flight; rendered as the loading indicator
    #[default]
    Unloaded,
    /// Terminal: the result is never replaced or mutated
    Loaded(QueryResult),
    Failed(FetchError),
}

impl ViewState {
    pub fn is_unloaded(&self) -> bool {
        matches!(self, ViewState::Unloaded)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    /// Apply the outcome of a fetch.
    ///
    /// Only an `Unloaded` view accepts an outcome. Returns whether it was applied.
    pub fn resolve(&mut self, outcome: Result<QueryResult, FetchError>) -> bool {
        if !self.is_unloaded() {
            return false;
        }
        *self = match outcome {
            Ok(result) => ViewState::Loaded(result),
            Err(err) => ViewState::Failed(err),
        };
        true
    }

    /// Apply an outcome for a view that may have been torn down while the
    /// fetch was in flight. Nothing changes once `mounted` is false.
    pub fn settle(&mut self, mounted: bool, outcome: Result<QueryResult, FetchError>) -> bool {
        if !mounted {
            return false;
        }
        self.resolve(outcome)
    }

    /// `Failed` back to `Unloaded`. Returns whether a new fetch should start.
    pub fn retry(&mut self) -> bool {
        if let ViewState::Failed(_) = self {
            *self = ViewState::Unloaded;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> QueryResult {
        QueryResult { all_films: Vec::new() }
    }

    #[test]
    fn test_initial_state_is_unloaded() {
        assert!(ViewState::default().is_unloaded());
    }

    #[test]
    fn test_success_loads() {
        let mut state = ViewState::Unloaded;
        assert!(state.resolve(Ok(empty_result())));
        assert_eq!(state, ViewState::Loaded(empty_result()));
    }

    #[test]
    fn test_failure_is_visible() {
        let mut state = ViewState::Unloaded;
        let err = FetchError::Network("offline".to_string());
        assert!(state.resolve(Err(err.clone())));
        assert_eq!(state, ViewState::Failed(err));
    }

    #[test]
    fn test_loaded_is_terminal() {
        let mut state = ViewState::Loaded(empty_result());
        assert!(!state.resolve(Err(FetchError::Parse("late".to_string()))));
        assert!(!state.retry());
        assert!(state.is_loaded());
    }

    #[test]
    fn test_retry_only_from_failed() {
        let mut state = ViewState::Unloaded;
        assert!(!state.retry());

        state.resolve(Err(FetchError::Server { status: 502, message: String::new() }));
        assert!(state.retry());
        assert!(state.is_unloaded());

        assert!(state.resolve(Ok(empty_result())));
        assert!(state.is_loaded());
    }

    #[test]
    fn test_settle_after_teardown_is_dropped() {
        let mut state = ViewState::Unloaded;
        assert!(!state.settle(false, Ok(empty_result())));
        assert!(state.is_unloaded());

        assert!(!state.settle(false, Err(FetchError::Network("offline".to_string()))));
        assert!(state.is_unloaded());
    }

    #[test]
    fn test_settle_while_mounted_resolves() {
        let mut state = ViewState::Unloaded;
        assert!(state.settle(true, Ok(empty_result())));
        assert_eq!(state, ViewState::Loaded(empty_result()));

        // Loaded stays terminal even for a mounted view
        assert!(!state.settle(true, Err(FetchError::Parse("late".to_string()))));
        assert!(state.is_loaded());
    }

    #[test]
    fn test_failed_ignores_stray_result() {
        let err = FetchError::Network("offline".to_string());
        let mut state = ViewState::Failed(err.clone());
        assert!(!state.resolve(Ok(empty_result())));
        assert_eq!(state, ViewState::Failed(err));
    }
}
