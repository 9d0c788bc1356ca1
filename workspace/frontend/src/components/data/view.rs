use workflow::{Dataset, Event};
use yew::prelude::*;

use super::table::DatasetTable;
use crate::session::use_session;

#[function_component(DataPage)]
pub fn data_page() -> Html {
    let session = use_session();
    let selected = session.state.dataset;

    html! {
        <>
            <h1 class="text-3xl font-bold mb-4">{"Data Exploration"}</h1>
            <div id="dataset-picker" class="grid grid-cols-1 gap-6 sm:grid-cols-3 scroll-section">
                { for Dataset::ALL.iter().map(|dataset| {
                    let dataset = *dataset;
                    let active = selected == Some(dataset);
                    let onclick = {
                        let session = session.clone();
                        Callback::from(move |_| {
                            log::debug!("Dataset selected: {:?}", dataset);
                            session.dispatch(Event::SelectDataset(dataset));
                        })
                    };

                    html! {
                        <button
                            class={classes!(
                                "btn",
                                "h-auto",
                                "py-4",
                                if active { "btn-primary" } else { "btn-outline" },
                            )}
                            {onclick}
                        >
                            <i class="fas fa-database mr-2"></i>
                            { dataset.title() }
                        </button>
                    }
                })}
            </div>
            { match selected {
                Some(dataset) => html! {
                    <DatasetTable key={dataset.wire_name()} dataset={dataset} />
                },
                None => html! {
                    <div class="alert alert-info mt-6">
                        <i class="fas fa-info-circle"></i>
                        <span>{"Select a dataset to preview its records."}</span>
                    </div>
                },
            }}
        </>
    }
}
