use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub author: AttrValue,
    #[prop_or_default]
    pub creators: Vec<String>,
    pub verifier: AttrValue,
}

/// Credit line under a level heading: the uploader, any co-creators and the
/// verifier, collapsed when they are all the same person.
#[function_component(LevelAuthors)]
pub fn level_authors(p: &Props) -> Html {
    let solo = p.creators.is_empty() && p.author == p.verifier;
    if solo {
        return html! {
            <p class="level-authors">
                <span class="credit-label">{ "By " }</span>
                <span class="credit-name">{ p.author.clone() }</span>
            </p>
        };
    }

    let creators = if p.creators.is_empty() {
        String::new()
    } else {
        format!(" with {}", p.creators.join(", "))
    };
    html! {
        <p class="level-authors">
            <span class="credit-label">{ "By " }</span>
            <span class="credit-name">{ p.author.clone() }</span>
            <span class="credit-extra">{ creators }</span>
            <span class="credit-label">{ ", verified by " }</span>
            <span class="credit-name">{ p.verifier.clone() }</span>
        </p>
    }
}
