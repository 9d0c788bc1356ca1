use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Showing error to user: {}", props.message);

    let retry_button = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        let onclick = Callback::from(move |_| {
            log::debug!("Retry requested");
            on_retry.emit(());
        });

        html! {
            <button class="btn btn-primary btn-sm" {onclick}>
                <i class="fas fa-redo mr-1"></i>
                {"Try Again"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-8 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <span class="text-sm">{&props.message}</span>
            </div>
            { retry_button.unwrap_or_default() }
        </div>
    }
}
