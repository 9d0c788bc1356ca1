//! Client-side prediction workflow core.
//!
//! Everything with state or a lifecycle lives here, free of browser and
//! network dependencies: the session state container and its reducer, the
//! prediction history accumulator, form-input validation, the submission
//! error taxonomy, and the bookkeeping half of the scroll-reveal observer.
//! The frontend crate only dispatches events into [`SessionState::reduce`]
//! and renders what comes back out.

pub mod error;
pub mod history;
pub mod query;
pub mod reveal;
pub mod state;

pub use error::PredictError;
pub use history::{ChartSeries, HistoryPoint, PredictionHistory};
pub use query::parse_query;
pub use reveal::{RevealSet, REVEAL_THRESHOLD};
pub use state::{Dataset, Event, Page, SessionState, WorkflowState};
