use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    List,
    #[at("/roulette")]
    Roulette,
    #[at("/404")]
    #[not_found]
    NotFound,
}
