use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::{InputEvent, MouseEvent};
use yew::prelude::*;
use yew::TargetCast;

use crate::api::HttpApi;
use crate::browser::{schedule_toast, scroll_into_view, BrowserDownload};
use crate::config::ClientConfig;
use crate::flow::{check_backend_health, download_pdf, generate_worksheet};
use crate::model::{MoodChoice, Subject};
use crate::state::{Action, AppState};
use crate::toast::Toast;
use crate::view_model::{question_cards, worksheet_caption};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let api = use_memo((), |_| HttpApi::new(ClientConfig::from_build_env()));
    let results_ref = use_node_ref();

    // Startup health probe; never touches the UI.
    {
        let api = (*api).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                check_backend_health(&api).await;
            });
            || ()
        });
    }

    // Bring freshly rendered results into view.
    {
        let results_ref = results_ref.clone();
        let shown = state.results_visible;
        let worksheet_id = state.worksheet.as_ref().map(|w| w.worksheet_id.clone());
        use_effect_with((shown, worksheet_id), move |(shown, _)| {
            if *shown {
                if let Some(el) = results_ref.cast::<web_sys::Element>() {
                    scroll_into_view(&el);
                }
            }
            || ()
        });
    }

    let on_mood_text = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(Action::TypeMood(input.value()));
        })
    };

    let on_generate = {
        let state = state.clone();
        let api = (*api).clone();
        Callback::from(move |_: MouseEvent| {
            let selection = state.selection.clone();
            let dispatcher = state.dispatcher();
            let api = api.clone();
            spawn_local(async move {
                generate_worksheet(&api, &selection, move |a| dispatcher.dispatch(a)).await;
            });
        })
    };

    let on_download = {
        let state = state.clone();
        let api = (*api).clone();
        Callback::from(move |_: MouseEvent| {
            let snapshot = (*state).clone();
            let dispatcher = state.dispatcher();
            let api = api.clone();
            spawn_local(async move {
                download_pdf(&api, &BrowserDownload, &snapshot, move |a| {
                    dispatcher.dispatch(a)
                })
                .await;
            });
        })
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::DismissNotice))
    };

    let selected_emoji = state.selection.selected_emoji();
    let selected_subject = state.selection.subject();

    html! {
        <div class="app-shell">
            <header>
                <h1>{"⚡ ZappyLearn"}</h1>
                <p class="sub">{"Tell us how you feel, pick a subject, and get a worksheet made for your mood."}</p>
            </header>

            <main>
                <section>
                    <h2>{"1. How are you feeling today?"}</h2>
                    <div class="emoji-row">
                        {
                            for MoodChoice::ALL.iter().map(|&choice| {
                                let dispatcher = state.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(Action::SelectMood(choice))
                                });
                                let class = classes!(
                                    "emoji-btn",
                                    (selected_emoji == Some(choice)).then_some("selected")
                                );
                                html! {
                                    <button {class} {onclick} title={choice.token()}>
                                        { choice.emoji() }
                                    </button>
                                }
                            })
                        }
                    </div>
                    <input
                        id="moodText"
                        type="text"
                        placeholder="...or describe it in your own words"
                        value={state.selection.typed_text().to_string()}
                        oninput={on_mood_text}
                    />
                </section>

                <section>
                    <h2>{"2. Choose a subject"}</h2>
                    <div class="subject-row">
                        {
                            for Subject::ALL.iter().map(|&subject| {
                                let dispatcher = state.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(Action::SelectSubject(subject))
                                });
                                let class = classes!(
                                    "subject-btn",
                                    (selected_subject == Some(subject)).then_some("selected")
                                );
                                html! {
                                    <button {class} {onclick}>{ subject.label() }</button>
                                }
                            })
                        }
                    </div>
                </section>

                <button class="btn btn-primary" onclick={on_generate} disabled={state.loading}>
                    { if state.loading { "Creating your worksheet..." } else { "✨ Generate Worksheet" } }
                </button>

                if let Some(notice) = &state.notice {
                    <div class="error">
                        { notice }
                        <button class="btn-close" onclick={on_dismiss}>{"✕"}</button>
                    </div>
                }

                if state.loading {
                    <div class="loading">{"Thinking up some questions for you..."}</div>
                }

                { render_results(&state, &results_ref, on_download) }
            </main>

            <div class="toast-stack">
                {
                    for state.toasts.iter().map(|toast| html! {
                        <ToastView key={toast.id} toast={toast.clone()} dispatcher={state.dispatcher()} />
                    })
                }
            </div>
        </div>
    }
}

fn render_results(
    state: &UseReducerHandle<AppState>,
    results_ref: &NodeRef,
    on_download: Callback<MouseEvent>,
) -> Html {
    let Some(ws) = state.worksheet.as_ref().filter(|_| state.results_visible) else {
        return html! {};
    };

    html! {
        <section class="results" ref={results_ref.clone()}>
            <div class="motivation">
                <span class="motivation-emoji">{ ws.motivation_emoji.clone().unwrap_or_default() }</span>
                <p class="motivation-text">{ ws.motivation.clone().unwrap_or_default() }</p>
            </div>

            <div class="questions">
                {
                    for question_cards(ws).into_iter().map(|card| html! {
                        <div class={card.css_class()}>
                            <div class="difficulty-badge">{ card.badge() }</div>
                            <div class="question-text">{ card.text }</div>
                        </div>
                    })
                }
            </div>

            if let Some(caption) = worksheet_caption(ws) {
                <p class="sub">{ caption }</p>
            }

            <button class="btn btn-secondary" onclick={on_download} disabled={state.pdf_busy}>
                { if state.pdf_busy { "Generating PDF..." } else { "📥 Download PDF Worksheet" } }
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<AppState>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastProps) -> Html {
    {
        let dispatcher = props.dispatcher.clone();
        let id = props.toast.id;
        use_effect_with(props.toast.phase, move |phase| {
            let timeout = schedule_toast(*phase, move || {
                dispatcher.dispatch(Action::ToastElapsed(id))
            });
            // Unmounting or a phase change cancels the pending timer.
            move || drop(timeout)
        });
    }

    html! {
        <div class={props.toast.phase.css_class()}>{ &props.toast.message }</div>
    }
}
