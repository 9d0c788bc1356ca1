use workflow::Dataset;
use yew::prelude::*;

use crate::api_client::dataset::{get_dataset_rows, DatasetRow};
use crate::hooks::FetchState;
use crate::ui::error::ErrorDisplay;
use crate::ui::loading::Loading;
use crate::ui::fetch_hook::use_fetch_with_refetch;

/// Records shown before the table is cut off. Keeps the DOM small for the
/// larger datasets.
const PREVIEW_ROWS: usize = 25;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dataset: Dataset,
}

#[function_component(DatasetTable)]
pub fn dataset_table(props: &Props) -> Html {
    let dataset = props.dataset;
    let (fetch_state, refetch) = use_fetch_with_refetch(move || get_dataset_rows(dataset));

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h3 class="card-title">{dataset.title()}</h3>
                { match &*fetch_state {
                    FetchState::NotStarted => html! {},
                    FetchState::Loading => html! {
                        <Loading text={format!("Loading {}...", dataset.title())} />
                    },
                    FetchState::Error(error) => html! {
                        <ErrorDisplay
                            message={error.to_string()}
                            on_retry={Some(refetch.clone())}
                        />
                    },
                    FetchState::Success(rows) => render_rows(rows),
                }}
            </div>
        </div>
    }
}

fn render_rows(rows: &[DatasetRow]) -> Html {
    let Some(first) = rows.first() else {
        return html! {
            <div class="alert alert-info">
                <span>{"This dataset has no records."}</span>
            </div>
        };
    };
    let columns: Vec<String> = first.keys().cloned().collect();

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        { for columns.iter().map(|column| html! { <th>{column}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().take(PREVIEW_ROWS).map(|row| html! {
                        <tr>
                            { for columns.iter().map(|column| {
                                let cell = row.get(column).map(render_cell).unwrap_or_default();
                                html! { <td>{cell}</td> }
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
            { if rows.len() > PREVIEW_ROWS {
                html! {
                    <p class="text-sm text-gray-500 mt-2">
                        {format!("Showing first {} of {} records.", PREVIEW_ROWS, rows.len())}
                    </p>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
