use yew::prelude::*;

use crate::components::level_authors::LevelAuthors;
use crate::components::spinner::Spinner;
use crate::theme::Theme;
use crate::video;
use makerboard_core::{Editor, ListEntry, RANKED_POOL_LEN};

pub const LIST_FAILED_MSG: &str =
    "Failed to load list. Retry in a few minutes or notify list staff.";
pub const EDITORS_FAILED_MSG: &str = "Failed to load list editors.";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub theme: Theme,
}

fn rank_label(index: usize) -> String {
    if index < RANKED_POOL_LEN {
        format!("#{}", index + 1)
    } else {
        "Legacy".to_string()
    }
}

fn entry_label(entry: &ListEntry) -> (String, bool) {
    match entry {
        ListEntry::Loaded(level) => (level.name.clone(), false),
        ListEntry::Failed(tag) => (format!("Error ({tag}.json)"), true),
    }
}

#[function_component(ListPage)]
pub fn list_page(p: &Props) -> Html {
    let list = use_state(|| None::<Vec<ListEntry>>);
    let editors = use_state(Vec::<Editor>::new);
    let errors = use_state(Vec::<String>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| 0usize);

    {
        let list = list.clone();
        let editors = editors.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let mut notices = Vec::new();
                match crate::content::fetch_list().await {
                    Ok(entries) => {
                        notices.extend(
                            entries
                                .iter()
                                .filter_map(ListEntry::error_tag)
                                .map(|tag| format!("Failed to load level. ({tag}.json)")),
                        );
                        list.set(Some(entries));
                        match crate::content::fetch_editors().await {
                            Ok(roster) => editors.set(roster),
                            Err(err) => {
                                log::warn!("editor roster failed to load: {err}");
                                notices.push(EDITORS_FAILED_MSG.to_string());
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("list failed to load: {err}");
                        notices.push(LIST_FAILED_MSG.to_string());
                    }
                }
                errors.set(notices);
                loading.set(false);
            });
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (list, editors, errors, loading);
            }
            || {}
        });
    }

    if *loading {
        return html! {
            <main class="page-list">
                <Spinner />
            </main>
        };
    }

    let theme = p.theme;

    let table = list
        .as_ref()
        .map(|entries| {
            let rows = entries.iter().enumerate().map(|(i, entry)| {
                let (label, broken) = entry_label(entry);
                let onclick = {
                    let selected = selected.clone();
                    Callback::from(move |_| selected.set(i))
                };
                let cell_class = classes!(
                    "level",
                    (*selected == i).then_some("active"),
                    broken.then_some("error"),
                );
                html! {
                    <tr>
                        <td class="rank">
                            <p class="rank-label">{ rank_label(i) }</p>
                        </td>
                        <td class={cell_class}>
                            <button {onclick}>
                                <span>{ label }</span>
                            </button>
                        </td>
                    </tr>
                }
            });
            html! { <table class="list">{ for rows }</table> }
        })
        .unwrap_or_default();

    let fallback_detail = || {
        html! {
            <div class="level-detail level-detail-empty">
                <p>{ "(ノಠ益ಠ)ノ彡┻━┻" }</p>
            </div>
        }
    };
    let detail = match list.as_ref().and_then(|entries| entries.get(*selected)) {
        Some(ListEntry::Loaded(level)) => {
            let rank = *selected + 1;
            let embed = video::embed_url(&level.verification).unwrap_or_default();
            let showcase_link = level
                .showcase
                .as_ref()
                .map(|url| {
                    html! {
                        <a class="showcase-link" href={url.clone()} target="_blank" rel="noopener">
                            { "Showcase video" }
                        </a>
                    }
                })
                .unwrap_or_default();
            let record_note = if rank > RANKED_POOL_LEN {
                html! { <p>{ "This level does not accept new records." }</p> }
            } else {
                Html::default()
            };
            let records = level.records.iter().map(|record| {
                let device = if record.mobile {
                    html! { <img src={theme.handheld_icon_src()} alt="Handheld" /> }
                } else {
                    Html::default()
                };
                html! {
                    <tr class="record">
                        <td class="percent"><p>{ format!("{}%", record.time) }</p></td>
                        <td class="user">
                            <a href={record.link.clone()} target="_blank" rel="noopener">
                                { record.user.clone() }
                            </a>
                        </td>
                        <td class="device">{ device }</td>
                        <td class="hz"><p>{ format!("{}Hz", record.hz) }</p></td>
                    </tr>
                }
            });
            html! {
                <div class="level-detail">
                    <h1>{ level.name.clone() }</h1>
                    <LevelAuthors
                        author={level.author.clone()}
                        creators={level.creators.clone()}
                        verifier={level.verifier.clone()}
                    />
                    <iframe class="video" src={embed} frameborder="0" allowfullscreen="true"></iframe>
                    { showcase_link }
                    <ul class="stats">
                        <li>
                            <div class="stat-title">{ "Course ID" }</div>
                            <p>{ level.id.clone() }</p>
                        </li>
                    </ul>
                    <h2>{ "Records" }</h2>
                    { record_note }
                    <table class="records">{ for records }</table>
                </div>
            }
        }
        _ => fallback_detail(),
    };

    let errors_block = if errors.is_empty() {
        Html::default()
    } else {
        html! {
            <div class="errors">
                { for errors.iter().map(|notice| html! { <p class="error">{ notice.clone() }</p> }) }
            </div>
        }
    };

    let editors_block = if editors.is_empty() {
        Html::default()
    } else {
        html! {
            <>
                <h3>{ "List Editors" }</h3>
                <ol class="editors">
                    { for editors.iter().map(|editor| {
                        let name = editor.link.as_ref().map_or_else(
                            || html! { <p>{ editor.name.clone() }</p> },
                            |link| html! {
                                <a class="editor-link" href={link.clone()} target="_blank" rel="noopener">
                                    { editor.name.clone() }
                                </a>
                            },
                        );
                        html! {
                            <li>
                                <img src={theme.role_icon_src(editor.role)} alt={editor.role.as_str()} />
                                { name }
                            </li>
                        }
                    }) }
                </ol>
            </>
        }
    };

    html! {
        <main class="page-list">
            <div class="list-container">{ table }</div>
            <div class="level-container">{ detail }</div>
            <aside class="meta-container">
                { errors_block }
                { editors_block }
                { submission_rules() }
            </aside>
        </main>
    }
}

fn submission_rules() -> Html {
    html! {
        <div class="rules">
            <h1>{ "Hardest Levels Leaderboard – Submission Rules" }</h1>
            <p>
                { "Submissions must be verifiable, transparent and fair. Every entry is \
                   checked for compliance before being accepted." }
            </p>
            <h2>{ "Submission Requirements" }</h2>
            <ul>
                <li>{ "Submit clears as video links. Include the level name and course code in the title or description." }</li>
                <li>{ "The video must show the entire run, from start to the clear screen. Only trimming before the start or after the clear is allowed." }</li>
                <li>{ "Commentary, microphone input or controller sounds are not required. Game audio is sufficient." }</li>
                <li>{ "Gameplay must be clearly visible; 720p at 30 FPS or better is recommended." }</li>
            </ul>
            <h2>{ "Legitimacy" }</h2>
            <ul>
                <li>{ "No cheat devices, save-state abuse, auto-players or modified software." }</li>
                <li>{ "Completions must be done on standard, unmodified hardware running the official game." }</li>
                <li>{ "The submitting player must be the one who completed the level. Shared accounts are not allowed." }</li>
            </ul>
            <h2>{ "Level Criteria" }</h2>
            <ul>
                <li>{ "Only levels currently on the leaderboard are eligible. Removed levels accept submissions for 24 hours after removal." }</li>
                <li>{ "Submissions must target the official, unmodified upload of the course." }</li>
                <li>{ "No dev exits, glitches or unintended shortcuts to bypass the level." }</li>
            </ul>
            <p>
                { "Submissions failing these requirements may be rejected. Make sure the video \
                   clearly demonstrates the full, legitimate completion." }
            </p>
        </div>
    }
}
