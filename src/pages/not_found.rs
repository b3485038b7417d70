//! Not Found Page

use leptos::prelude::*;

use crate::components::AppLink;
use crate::context::set_document_title;
use crate::routes::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_document_title("Page not found");
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"We couldn't find the page you're looking for."</p>
            <AppLink page=Page::Home class="btn-primary">"Back to home"</AppLink>
        </section>
    }
}
