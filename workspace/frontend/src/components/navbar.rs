use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-primary text-primary-content sticky top-0 z-10 shadow-md">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-home mr-2"></i>
                    {"Melbourne Housing"}
                </Link<Route>>
            </div>
            <div class="navbar-end">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Home} classes="btn btn-ghost">{"Home"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Data} classes="btn btn-ghost">{"Data"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Predict} classes="btn btn-ghost">{"Predict"}</Link<Route>></li>
                </ul>
            </div>
        </div>
    }
}
