//! Toast Component
//!
//! Shows the latest status message from [`AppContext::notify`].

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.toast.get().map(|toast| {
            let class = if toast.is_error { "toast error" } else { "toast" };
            view! {
                <div class=class on:click=move |_| ctx.dismiss()>
                    {toast.text}
                </div>
            }
        })
    }
}
