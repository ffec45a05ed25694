use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="py-24 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">"Page not found"</h1>
            <a href="/" class="text-indigo-600 hover:text-indigo-800">"Back to the start page"</a>
        </section>
    }
}
