use workflow::WorkflowState;
use yew::prelude::*;

use super::chart::HistoryChart;
use super::form::PredictForm;
use crate::session::use_session;
use crate::ui::error::ErrorDisplay;
use crate::ui::loading::Loading;

#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    let session = use_session();
    let state = &session.state;

    html! {
        <>
            <h1 class="text-3xl font-bold mb-4">{"Predict a Property Price"}</h1>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div id="predict-form" class="card bg-base-100 shadow scroll-section">
                    <div class="card-body">
                        <h3 class="card-title">{"Ask the Model"}</h3>
                        <PredictForm />
                        { render_outcome(&state.workflow) }
                    </div>
                </div>
                <div id="predict-chart" class="card bg-base-100 shadow scroll-section">
                    <div class="card-body">
                        <h3 class="card-title">{"Predicted Prices"}</h3>
                        { if state.history.is_empty() {
                            html! {
                                <div class="text-center py-8 text-gray-500">
                                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                                    <p>{"Successful predictions accumulate here as a time series."}</p>
                                </div>
                            }
                        } else {
                            html! { <HistoryChart series={state.history.to_chart_series()} /> }
                        }}
                    </div>
                </div>
            </div>
        </>
    }
}

fn render_outcome(workflow: &WorkflowState) -> Html {
    match workflow {
        WorkflowState::Idle => html! {},
        WorkflowState::Submitting => html! { <Loading text="Asking the model..." /> },
        WorkflowState::Succeeded(response) => html! {
            <div class="stats shadow mt-4">
                <div class="stat">
                    <div class="stat-title">{"Predicted price"}</div>
                    <div class="stat-value text-primary">
                        { format_price(response.predicted_price) }
                    </div>
                </div>
            </div>
        },
        WorkflowState::Failed(error) => html! {
            <div class="mt-4">
                <ErrorDisplay message={error.to_string()} />
            </div>
        },
    }
}

/// Renders a price as whole dollars with thousands separators.
fn format_price(price: f64) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
