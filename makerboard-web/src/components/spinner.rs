use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner-ring"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn spinner_announces_loading() {
        let html = block_on(LocalServerRenderer::<Spinner>::new().render());
        assert!(html.contains("aria-label=\"Loading\""));
    }
}
