use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    /// Styles the button for a destructive action.
    #[prop_or_default]
    pub danger: bool,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = {
        let cb = p.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(e);
        })
    };
    let class = classes!("btn", p.danger.then_some("btn-danger"));
    html! {
        <button {class} disabled={p.disabled} {onclick}>{ p.label.clone() }</button>
    }
}
