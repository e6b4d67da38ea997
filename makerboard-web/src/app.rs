use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::list::ListPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::roulette::RoulettePage;
use crate::router::Route;
use crate::theme::Theme;

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(Theme::from_storage);
    let active = *theme;

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            next.persist();
            theme.set(next);
        })
    };

    let render = Callback::from(move |route: Route| switch(route, active));

    html! {
        <BrowserRouter>
            <div class={classes!("app-shell", active.body_class())}>
                <header class="site-header">
                    <nav class="site-nav">
                        <Link<Route> to={Route::List} classes="nav-link">{ "List" }</Link<Route>>
                        <Link<Route> to={Route::Roulette} classes="nav-link">{ "Roulette" }</Link<Route>>
                    </nav>
                    <button class="theme-toggle" onclick={on_toggle_theme}>
                        { if active.is_dark() { "Light mode" } else { "Dark mode" } }
                    </button>
                </header>
                <Switch<Route> render={render} />
            </div>
        </BrowserRouter>
    }
}

fn switch(route: Route, theme: Theme) -> Html {
    match route {
        Route::List => html! { <ListPage {theme} /> },
        Route::Roulette => html! { <RoulettePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route as R;
    use yew_router::Routable;

    #[test]
    fn routes_map_to_their_paths() {
        assert_eq!(R::List.to_path(), "/");
        assert_eq!(R::Roulette.to_path(), "/roulette");
        assert_eq!(R::NotFound.to_path(), "/404");
        assert_eq!(R::recognize("/roulette"), Some(R::Roulette));
    }
}
