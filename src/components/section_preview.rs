//! Section Preview Component
//!
//! Read-only view of the menu grouped by course.

use leptos::prelude::*;
use soundfood_core::make_sections_list;

use crate::messages::section_label;
use crate::store::{current_language, use_app_store, AppStateStoreFields};

#[component]
pub fn SectionPreview() -> impl IntoView {
    let store = use_app_store();
    let sections = move || make_sections_list(&store.dishes().get());

    view! {
        <aside class="section-preview">
            {move || {
                let language = current_language(&store);
                sections()
                    .into_iter()
                    .map(|(section, dishes)| view! {
                        <div class="preview-section">
                            <h3>{section_label(section, language)}</h3>
                            <ul>
                                {dishes.into_iter().map(|d| view! { <li>{d.name}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()
            }}
        </aside>
    }
}
