use web_sys::HtmlInputElement;
use workflow::{parse_query, Event};
use yew::prelude::*;

use crate::api_client::predict::predict_price;
use crate::session::use_session;
use crate::ui::toast::ToastContext;

#[function_component(PredictForm)]
pub fn predict_form() -> Html {
    let session = use_session();
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider must wrap the application");
    let locality = use_state(String::new);
    let year = use_state(String::new);

    let on_locality_input = {
        let locality = locality.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            locality.set(input.value());
        })
    };

    let on_year_input = {
        let year = year.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            year.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let toast_ctx = toast_ctx.clone();
        let locality = locality.clone();
        let year = year.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if session.state.workflow.is_submitting() {
                log::debug!("Ignoring submit while a prediction is in flight");
                return;
            }

            let request = match parse_query(&locality, &year) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("Rejected prediction input: {}", error);
                    toast_ctx.show_error(error.to_string());
                    session.dispatch(Event::SubmissionFailed {
                        epoch: session.state.epoch,
                        error,
                    });
                    return;
                }
            };

            // Tag the request with the epoch current right now; a navigation
            // before the response lands bumps it and the reducer drops the
            // late completion.
            let epoch = session.state.epoch;
            session.dispatch(Event::SubmissionStarted);

            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match predict_price(&request).await {
                    Ok(response) => {
                        session.dispatch(Event::SubmissionSucceeded {
                            epoch,
                            year: request.year,
                            response,
                        });
                    }
                    Err(error) => {
                        session.dispatch(Event::SubmissionFailed { epoch, error });
                    }
                }
            });
        })
    };

    let submitting = session.state.workflow.is_submitting();

    html! {
        <form {onsubmit} class="flex flex-col gap-4">
            <div class="form-control">
                <label class="label" for="locality">
                    <span class="label-text">{"Locality"}</span>
                </label>
                <input
                    id="locality"
                    type="text"
                    class="input input-bordered"
                    placeholder="e.g. Richmond"
                    value={(*locality).clone()}
                    oninput={on_locality_input}
                />
            </div>
            <div class="form-control">
                <label class="label" for="year">
                    <span class="label-text">{"Year"}</span>
                </label>
                <input
                    id="year"
                    type="number"
                    class="input input-bordered"
                    placeholder="e.g. 2023"
                    value={(*year).clone()}
                    oninput={on_year_input}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={submitting}>
                { if submitting { "Predicting..." } else { "Predict Price" } }
            </button>
        </form>
    }
}
