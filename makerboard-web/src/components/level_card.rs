use yew::prelude::*;

use crate::video;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rank: u32,
    pub name: AttrValue,
    pub video: AttrValue,
    /// Extra line under the name, e.g. the course id or a "Completed" badge.
    #[prop_or_default]
    pub status: Option<AttrValue>,
    #[prop_or_default]
    pub status_class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// One roulette level: thumbnail linking to the verification video, rank and
/// name, an optional status line and whatever actions the caller slots in.
#[function_component(LevelCard)]
pub fn level_card(p: &Props) -> Html {
    let thumbnail = video::thumbnail_url(&p.video);
    html! {
        <div class="level-card">
            <a href={p.video.clone()} class="level-video" target="_blank" rel="noopener">
                {
                    thumbnail.map_or_else(
                        || html! { <div class="level-thumb level-thumb-missing"></div> },
                        |src| html! { <img class="level-thumb" {src} alt="" /> },
                    )
                }
            </a>
            <div class="level-meta">
                <p class="level-rank">{ format!("#{}", p.rank) }</p>
                <h2 class="level-name">{ p.name.clone() }</h2>
                {
                    p.status.clone().map(|status| html! {
                        <p class={classes!("level-status", p.status_class.clone())}>{ status }</p>
                    }).unwrap_or_default()
                }
            </div>
            { p.children.clone() }
        </div>
    }
}
