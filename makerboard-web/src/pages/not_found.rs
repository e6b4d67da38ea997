use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page-not-found">
            <h1>{ "404" }</h1>
            <p>{ "Nothing ranked here." }</p>
            <Link<Route> to={Route::List}>{ "Back to the list" }</Link<Route>>
        </main>
    }
}
