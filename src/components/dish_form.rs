//! Dish Form Component
//!
//! Create/edit form for a single dish. Taste toggles are derived from whether
//! each taste value is null, so reopening a saved dish shows exactly the
//! toggles that were on.

use leptos::prelude::*;
use soundfood_core::{Dish, Section, TasteField};

use crate::components::EditTarget;
use crate::context::AppContext;
use crate::messages::{message, section_label};
use crate::store::{current_language, store_save_dish, use_app_store, AppStateStoreFields};

/// Split a comma-separated tag field
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Dish form, shown while a dish is being created or edited
#[component]
pub fn DishForm(target: EditTarget) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let initial = match &target {
        EditTarget::New => Dish::new(""),
        EditTarget::Dish(key) => store
            .dishes()
            .get_untracked()
            .into_iter()
            .find(|d| d.matches(key))
            .unwrap_or_else(|| Dish::new("")),
    };
    let draft = RwSignal::new(initial);
    let is_new = target == EditTarget::New;

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let dish = draft.get_untracked();
        let language = current_language(&store);

        let (key, dish) = match &target {
            EditTarget::New => {
                let dish = ctx.assign_temp_id(dish);
                (dish.key(), dish)
            }
            EditTarget::Dish(key) => (key.clone(), dish),
        };

        let status = store_save_dish(&store, &key, dish);
        ctx.notify(message(status.message_key(), language), status.is_error());
        if !status.is_error() {
            ctx.close_editor();
        }
    };

    let tag_field = move |label: &'static str, get: fn(&Dish) -> Vec<String>, set: fn(&mut Dish, Vec<String>)| {
        view! {
            <label class="dish-field">
                <span>{label}</span>
                <input
                    type="text"
                    placeholder="comma, separated"
                    prop:value=move || draft.with(|d| join_tags(&get(d)))
                    on:change=move |ev| draft.update(|d| set(d, parse_tags(&event_target_value(&ev))))
                />
            </label>
        }
    };

    view! {
        <form class="dish-form" on:submit=on_save>
            <h2>{if is_new { "New dish" } else { "Edit dish" }}</h2>

            <label class="dish-field">
                <span>"Name"</span>
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>

            <label class="dish-field">
                <span>"Description"</span>
                <textarea
                    prop:value=move || draft.with(|d| d.description.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        draft.update(|d| d.description = if text.is_empty() { None } else { Some(text) });
                    }
                />
            </label>

            <label class="dish-field">
                <span>"Section"</span>
                <select on:change=move |ev| draft.update(|d| d.section = Section::from_str(&event_target_value(&ev)))>
                    {Section::ALL.iter().map(|section| {
                        let section = *section;
                        view! {
                            <option
                                value=section.as_str()
                                prop:selected=move || draft.with(|d| d.section == section)
                            >
                                {move || section_label(section, current_language(&store))}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <fieldset class="taste-group">
                <legend>"Basic taste"</legend>
                {TasteField::BASIC.iter().map(|f| view! { <TasteRow draft=draft field=*f /> }).collect_view()}
            </fieldset>

            <fieldset class="taste-group">
                <legend>"Other taste"</legend>
                {TasteField::OTHER.iter().map(|f| view! { <TasteRow draft=draft field=*f /> }).collect_view()}
            </fieldset>

            <fieldset class="tag-group">
                <legend>"Vision"</legend>
                {tag_field("Colors", |d| d.vision.colors.clone(), |d, v| d.vision.colors = v)}
                {tag_field("Shapes", |d| d.vision.shapes.clone(), |d, v| d.vision.shapes = v)}
            </fieldset>

            {tag_field("Textures", |d| d.textures.clone(), |d, v| d.textures = v)}
            {tag_field("Emotions", |d| d.emotions.clone(), |d, v| d.emotions = v)}

            <div class="form-actions">
                <button type="submit">"Save dish"</button>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.close_editor()>"Cancel"</button>
            </div>
        </form>
    }
}

/// One taste toggle with its intensity input
#[component]
fn TasteRow(draft: RwSignal<Dish>, field: TasteField) -> impl IntoView {
    let enabled = move || draft.with(|d| d.is_taste_enabled(field));

    view! {
        <div class="taste-row">
            <label>
                <input
                    type="checkbox"
                    prop:checked=enabled
                    on:change=move |ev| draft.update(|d| d.set_taste_enabled(field, event_target_checked(&ev)))
                />
                {field.as_str()}
            </label>
            <input
                type="number"
                min="0"
                max="10"
                step="0.5"
                prop:disabled=move || !enabled()
                prop:value=move || draft.with(|d| d.taste(field).map(|v| v.to_string()).unwrap_or_default())
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                        draft.update(|d| d.set_taste(field, value));
                    }
                }
            />
        </div>
    }
}
