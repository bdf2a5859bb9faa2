//! The tracker page: add form with autocomplete, clear-all, and the editable bet list.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::bet::BetField;
use crate::config::*;
use crate::controller::Controller;
use crate::format::{format_amount, format_multiplier, format_return};
use crate::store::{LocalStorageBackend, Store};

type Tracker = Controller<LocalStorageBackend>;

#[derive(Properties, PartialEq)]
struct SuggestionListProps {
    id: AttrValue,
    items: Vec<String>,
}

#[function_component(SuggestionList)]
fn suggestion_list(props: &SuggestionListProps) -> Html {
    html! {
        <datalist id={props.id.clone()}>
            { for props.items.iter().map(|s| html!{ <option value={s.clone()} /> }) }
        </datalist>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let tracker = use_state(|| Tracker::new(Store::open(LocalStorageBackend::default())));

    // Handlers
    let on_draft_input = |field: BetField| {
        let tracker = tracker.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*tracker).clone();
            next.set_draft_field(field, target.value());
            tracker.set(next);
        })
    };
    let on_submit = {
        let tracker = tracker.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*tracker).clone();
            // An incomplete draft is ignored without feedback.
            if next.add_from_draft().is_ok() {
                tracker.set(next);
            }
        })
    };
    let on_clear_all = {
        let tracker = tracker.clone();
        Callback::from(move |_| {
            let mut next = (*tracker).clone();
            next.clear_all();
            tracker.set(next);
        })
    };

    let draft = tracker.draft();
    let title_suggestions = tracker.suggestions_for(&draft.title, BetField::Title);
    let name_suggestions = tracker.suggestions_for(&draft.name, BetField::Name);

    html! {
        <div class="container">
            <div class="card">
                <h1>{APP_TITLE}</h1>

                <form onsubmit={on_submit} class="row five">
                    <div>
                        <input
                            placeholder={TITLE_PLACEHOLDER}
                            value={draft.title.clone()}
                            oninput={on_draft_input(BetField::Title)}
                            list="titleSuggestions"
                            aria-label="Bet title" />
                        <SuggestionList id="titleSuggestions" items={title_suggestions} />
                    </div>
                    <div>
                        <input
                            placeholder={NAME_PLACEHOLDER}
                            value={draft.name.clone()}
                            oninput={on_draft_input(BetField::Name)}
                            list="nameSuggestions"
                            aria-label="Bettor name" />
                        <SuggestionList id="nameSuggestions" items={name_suggestions} />
                    </div>
                    <input
                        type="number"
                        step="0.01"
                        placeholder={AMOUNT_PLACEHOLDER}
                        value={draft.amount.clone()}
                        oninput={on_draft_input(BetField::Amount)}
                        aria-label="Stake amount" />
                    <input
                        type="number"
                        step="0.01"
                        placeholder={MULTIPLIER_PLACEHOLDER}
                        value={draft.multiplier.clone()}
                        oninput={on_draft_input(BetField::Multiplier)}
                        aria-label="Odds multiplier" />
                    <button type="submit">{format!("+ {}", ADD_LABEL)}</button>
                </form>

                <div class="row end">
                    <button type="button" onclick={on_clear_all} class="danger">{CLEAR_ALL_LABEL}</button>
                </div>

                <div>
                    { for tracker.store().records().iter().enumerate().map(|(i, bet)| {
                        let on_delete = {
                            let tracker = tracker.clone();
                            Callback::from(move |_| {
                                let mut next = (*tracker).clone();
                                next.delete_at(i);
                                tracker.set(next);
                            })
                        };
                        let body = if tracker.is_editing(i) {
                            let on_field = |field: BetField| {
                                let tracker = tracker.clone();
                                Callback::from(move |e: InputEvent| {
                                    let target: HtmlInputElement = e.target_unchecked_into();
                                    let mut next = (*tracker).clone();
                                    next.update_field(i, field, &target.value());
                                    tracker.set(next);
                                })
                            };
                            let on_save = {
                                let tracker = tracker.clone();
                                Callback::from(move |_| {
                                    let mut next = (*tracker).clone();
                                    next.end_edit();
                                    tracker.set(next);
                                })
                            };
                            html!{
                                <>
                                    <input value={bet.title.clone()} oninput={on_field(BetField::Title)} list="editTitleSuggestions" aria-label="Bet title" />
                                    <SuggestionList id="editTitleSuggestions" items={tracker.suggestions_for(&bet.title, BetField::Title)} />
                                    <input value={bet.bettor_name.clone()} oninput={on_field(BetField::Name)} list="editNameSuggestions" aria-label="Bettor name" />
                                    <SuggestionList id="editNameSuggestions" items={tracker.suggestions_for(&bet.bettor_name, BetField::Name)} />
                                    <input type="number" step="0.01" value={bet.amount.to_input()} oninput={on_field(BetField::Amount)} aria-label="Stake amount" />
                                    <input type="number" step="0.01" value={bet.multiplier.to_input()} oninput={on_field(BetField::Multiplier)} aria-label="Odds multiplier" />
                                    <strong>{format_return(bet)}</strong>
                                    <button type="button" onclick={on_save}>{SAVE_LABEL}</button>
                                </>
                            }
                        } else {
                            let on_edit = {
                                let tracker = tracker.clone();
                                Callback::from(move |_| {
                                    let mut next = (*tracker).clone();
                                    next.begin_edit(i);
                                    tracker.set(next);
                                })
                            };
                            html!{
                                <>
                                    <span class="title">{&bet.title}</span>
                                    <span>{&bet.bettor_name}</span>
                                    <span>{format_amount(&bet.amount)}</span>
                                    <span>{format_multiplier(&bet.multiplier)}</span>
                                    <strong>{format_return(bet)}</strong>
                                    <button type="button" onclick={on_edit}>{EDIT_LABEL}</button>
                                </>
                            }
                        };
                        html!{
                            <div key={i} class="row seven bet">
                                { body }
                                <button type="button" onclick={on_delete} class="danger">{DELETE_LABEL}</button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
