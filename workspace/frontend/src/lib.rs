use stylist::css;
use stylist::yew::Global;
use workflow::Page;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
pub mod hooks;
pub mod session;
pub mod settings;
pub mod ui;

use components::data::DataPage;
use components::home::HomePage;
use components::layout::Layout;
use components::predict::PredictPage;
use session::SessionProvider;
use ui::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/data")]
    Data,
    #[at("/predict")]
    Predict,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Layout page={Page::Home}><HomePage /></Layout> }
        }
        Route::Data => {
            html! { <Layout page={Page::Data}><DataPage /></Layout> }
        }
        Route::Predict => {
            html! { <Layout page={Page::Predict}><PredictPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout page={Page::Home}><h1 class="text-3xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                .scroll-section {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .scroll-section.show {
                    opacity: 1;
                    transform: translateY(0);
                }
            "#)} />
            <ToastProvider>
                <SessionProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProvider>
            </ToastProvider>
        </>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== PropCast Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
