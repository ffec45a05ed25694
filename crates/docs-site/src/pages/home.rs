//! Landing page

use leptos::*;

use crate::components::NAV_LINKS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <section class="bg-gradient-to-br from-indigo-900 to-gray-900 text-white py-24">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">"Field Notes"</h1>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Practical notes on data wrangling with pandas and on building software in C++."
                    </p>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 grid md:grid-cols-3 gap-8 max-w-5xl">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="block rounded-xl shadow-lg p-6 text-center hover:shadow-xl transition">
                                <h2 class="text-xl font-semibold text-gray-900">{link.label}</h2>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
