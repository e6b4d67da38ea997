use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Messages oldest-first; they stack in enqueue order.
    pub messages: Vec<String>,
}

#[function_component(ToastStack)]
pub fn toast_stack(p: &Props) -> Html {
    html! {
        <div class="toasts" role="status" aria-live="polite">
            { for p.messages.iter().map(|message| html! {
                <div class="toast">
                    <p>{ message.clone() }</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn stacks_messages_in_order() {
        let props = Props {
            messages: vec!["Invalid file.".to_string(), "Second notice".to_string()],
        };
        let html = block_on(LocalServerRenderer::<ToastStack>::with_props(props).render());
        let first = html.find("Invalid file.").unwrap();
        let second = html.find("Second notice").unwrap();
        assert!(first < second);
    }
}
