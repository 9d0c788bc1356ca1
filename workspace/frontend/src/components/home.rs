use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <section id="hero" class="hero bg-base-100 rounded-lg shadow scroll-section">
                <div class="hero-content text-center py-12">
                    <div class="max-w-2xl">
                        <h1 class="text-4xl font-bold">{"Melbourne Housing Price Predictor"}</h1>
                        <p class="py-6">
                            {"Our advanced machine learning model analyzes historical sales data \
                              to provide accurate price forecasts for properties in Melbourne."}
                        </p>
                        <div class="flex gap-4 justify-center">
                            <Link<Route> to={Route::Predict} classes="btn btn-primary">
                                {"Get a Prediction"}
                            </Link<Route>>
                            <Link<Route> to={Route::Data} classes="btn btn-outline">
                                {"Explore the Data"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>

            <section id="highlights" class="grid grid-cols-1 gap-6 sm:grid-cols-3 mt-6 scroll-section">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <i class="fas fa-database text-3xl text-primary"></i>
                        <h2 class="card-title">{"Historical Data"}</h2>
                        <p>{"A decade of property sales across Melbourne localities, drawn from \
                             three published datasets."}</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <i class="fas fa-brain text-3xl text-primary"></i>
                        <h2 class="card-title">{"Machine Learning"}</h2>
                        <p>{"A regression model trained on locality-level sales history powers \
                             every forecast."}</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <i class="fas fa-chart-line text-3xl text-primary"></i>
                        <h2 class="card-title">{"Yearly Forecasts"}</h2>
                        <p>{"Ask for any locality and year; your predictions accumulate into a \
                             price time series you can compare at a glance."}</p>
                    </div>
                </div>
            </section>
        </>
    }
}
