//! Session state container and reducer.
//!
//! All UI state with a lifecycle — active page, dataset sub-selection,
//! submission workflow, prediction history — lives in one [`SessionState`]
//! value. The UI dispatches [`Event`]s and [`SessionState::reduce`] produces
//! the next value; nothing is mutated in place, which keeps the staleness
//! and ordering rules testable without a browser in sight.

use common::PredictResponse;
use tracing::debug;

use crate::error::PredictError;
use crate::history::PredictionHistory;

/// Logical pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Data,
    Predict,
}

/// Datasets offered on the data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    PropertySales,
    Kaggle,
    OpenPortal,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::PropertySales, Dataset::Kaggle, Dataset::OpenPortal];

    /// Path segment the service expects in `GET /data/{name}`.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Dataset::PropertySales => "property_sales",
            Dataset::Kaggle => "kaggle",
            Dataset::OpenPortal => "open_portal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::PropertySales => "Property Sales",
            Dataset::Kaggle => "Kaggle Dataset",
            Dataset::OpenPortal => "Open Data Portal",
        }
    }
}

/// Submission lifecycle of the predict form. Reset to `Idle` on navigation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Submitting,
    Succeeded(PredictResponse),
    Failed(PredictError),
}

impl WorkflowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }
}

/// Events the UI dispatches into the session reducer.
///
/// Completion events carry the epoch captured when their request was
/// submitted; the reducer drops them once a navigation has moved the
/// session past that epoch.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Page),
    SelectDataset(Dataset),
    SubmissionStarted,
    SubmissionSucceeded {
        epoch: u64,
        year: i32,
        response: PredictResponse,
    },
    SubmissionFailed {
        epoch: u64,
        error: PredictError,
    },
}

/// Whole-session state. One instance lives above the router for the life of
/// the page; reloading the page starts a fresh one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub page: Page,
    pub dataset: Option<Dataset>,
    pub workflow: WorkflowState,
    pub history: PredictionHistory,
    /// Bumped on every navigation; in-flight submissions are tagged with the
    /// epoch current at submit time so late responses can be recognized.
    pub epoch: u64,
}

impl SessionState {
    /// Applies one event, returning the next state.
    #[must_use]
    pub fn reduce(&self, event: Event) -> SessionState {
        match event {
            Event::Navigate(page) => {
                debug!(?page, "navigating");
                // History survives navigation: it is session scope, not
                // page scope. Everything else transient is dropped.
                SessionState {
                    page,
                    dataset: None,
                    workflow: WorkflowState::Idle,
                    history: self.history.clone(),
                    epoch: self.epoch + 1,
                }
            }
            Event::SelectDataset(dataset) => SessionState {
                dataset: Some(dataset),
                ..self.clone()
            },
            Event::SubmissionStarted => {
                if self.workflow.is_submitting() {
                    // Submissions are serialized; a submit while one is in
                    // flight is rejected, the user resubmits once it lands.
                    debug!("submission already in flight, ignoring submit");
                    return self.clone();
                }
                SessionState {
                    workflow: WorkflowState::Submitting,
                    ..self.clone()
                }
            }
            Event::SubmissionSucceeded {
                epoch,
                year,
                response,
            } => {
                if epoch != self.epoch {
                    debug!(epoch, current = self.epoch, "dropping stale response");
                    return self.clone();
                }
                if !self.workflow.is_submitting() {
                    // A success can only belong to the tracked in-flight
                    // submission; anything else is a request the serializer
                    // already rejected.
                    debug!("dropping response with no submission in flight");
                    return self.clone();
                }
                SessionState {
                    history: self.history.append(year, response.predicted_price),
                    workflow: WorkflowState::Succeeded(response),
                    ..self.clone()
                }
            }
            Event::SubmissionFailed { epoch, error } => {
                if epoch != self.epoch {
                    debug!(epoch, current = self.epoch, "dropping stale failure");
                    return self.clone();
                }
                SessionState {
                    workflow: WorkflowState::Failed(error),
                    ..self.clone()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_ok(state: &SessionState, year: i32, price: f64) -> SessionState {
        let started = state.reduce(Event::SubmissionStarted);
        started.reduce(Event::SubmissionSucceeded {
            epoch: started.epoch,
            year,
            response: PredictResponse {
                predicted_price: price,
            },
        })
    }

    #[test]
    fn test_successful_submissions_accumulate_in_order() {
        let mut state = SessionState::default().reduce(Event::Navigate(Page::Predict));

        let inputs = [(2013, 700000.0), (2021, 900000.0), (2013, 710000.0)];
        for (year, price) in inputs {
            state = submit_ok(&state, year, price);
        }

        assert_eq!(state.history.len(), inputs.len());
        for (i, (year, price)) in inputs.into_iter().enumerate() {
            assert_eq!(state.history.points()[i].year, year);
            assert_eq!(state.history.points()[i].predicted_price, price);
        }
    }

    #[test]
    fn test_richmond_scenario() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));

        let state = submit_ok(&state, 2020, 850000.0);
        assert_eq!(
            state.workflow,
            WorkflowState::Succeeded(PredictResponse {
                predicted_price: 850000.0
            })
        );
        assert_eq!(state.history.points()[0].year, 2020);

        let state = submit_ok(&state, 2021, 900000.0);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history.points()[1].year, 2021);
        assert_eq!(state.history.points()[1].predicted_price, 900000.0);

        // Simulated network failure for 2022: history untouched.
        let started = state.reduce(Event::SubmissionStarted);
        let state = started.reduce(Event::SubmissionFailed {
            epoch: started.epoch,
            error: PredictError::Network("connection refused".to_string()),
        });
        assert_eq!(state.history.len(), 2);
        assert!(matches!(state.workflow, WorkflowState::Failed(_)));
    }

    #[test]
    fn test_failed_submission_leaves_history_unchanged() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let state = submit_ok(&state, 2020, 850000.0);

        let started = state.reduce(Event::SubmissionStarted);
        let failed = started.reduce(Event::SubmissionFailed {
            epoch: started.epoch,
            error: PredictError::Service("HTTP 500".to_string()),
        });

        assert_eq!(failed.history.len(), 1);
        assert_eq!(
            failed.workflow,
            WorkflowState::Failed(PredictError::Service("HTTP 500".to_string()))
        );
    }

    #[test]
    fn test_navigation_clears_workflow_and_selection_but_not_history() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let state = submit_ok(&state, 2020, 850000.0);

        let state = state.reduce(Event::Navigate(Page::Data));
        let state = state.reduce(Event::SelectDataset(Dataset::Kaggle));
        assert_eq!(state.dataset, Some(Dataset::Kaggle));

        let state = state.reduce(Event::Navigate(Page::Predict));
        assert_eq!(state.page, Page::Predict);
        assert_eq!(state.workflow, WorkflowState::Idle);
        assert_eq!(state.dataset, None);
        // Session-persistent history: still there after a round trip.
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped_after_navigation() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let started = state.reduce(Event::SubmissionStarted);
        let in_flight_epoch = started.epoch;

        // User leaves the page before the response lands.
        let elsewhere = started.reduce(Event::Navigate(Page::Home));

        let after = elsewhere.reduce(Event::SubmissionSucceeded {
            epoch: in_flight_epoch,
            year: 2020,
            response: PredictResponse {
                predicted_price: 850000.0,
            },
        });
        assert_eq!(after, elsewhere);
        assert!(after.history.is_empty());

        let after = elsewhere.reduce(Event::SubmissionFailed {
            epoch: in_flight_epoch,
            error: PredictError::Network("timed out".to_string()),
        });
        assert_eq!(after, elsewhere);
        assert_eq!(after.workflow, WorkflowState::Idle);
    }

    #[test]
    fn test_submit_while_submitting_is_rejected() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let started = state.reduce(Event::SubmissionStarted);
        assert!(started.workflow.is_submitting());

        let again = started.reduce(Event::SubmissionStarted);
        assert_eq!(again, started);
    }

    #[test]
    fn test_success_without_submission_in_flight_is_dropped() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let state = submit_ok(&state, 2020, 850000.0);

        // Same epoch, but nothing in flight: the serializer already
        // rejected whatever request produced this.
        let after = state.reduce(Event::SubmissionSucceeded {
            epoch: state.epoch,
            year: 2021,
            response: PredictResponse {
                predicted_price: 900000.0,
            },
        });
        assert_eq!(after, state);
        assert_eq!(after.history.len(), 1);
    }

    #[test]
    fn test_history_length_matches_succeeded_transitions() {
        let mut state = SessionState::default().reduce(Event::Navigate(Page::Predict));
        let mut succeeded = 0usize;

        for year in 2015..2020 {
            state = submit_ok(&state, year, f64::from(year) * 400.0);
            succeeded += 1;

            let started = state.reduce(Event::SubmissionStarted);
            state = started.reduce(Event::SubmissionFailed {
                epoch: started.epoch,
                error: PredictError::Network("flaky".to_string()),
            });
        }

        assert_eq!(state.history.len(), succeeded);
    }

    #[test]
    fn test_dataset_selection_does_not_touch_workflow() {
        let state = SessionState::default().reduce(Event::Navigate(Page::Data));
        let state = submit_ok(&state, 2020, 850000.0);

        let selected = state.reduce(Event::SelectDataset(Dataset::PropertySales));
        assert_eq!(selected.workflow, state.workflow);
        assert_eq!(selected.history, state.history);
        assert_eq!(selected.dataset, Some(Dataset::PropertySales));
    }
}
