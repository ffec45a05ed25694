//! Documentation section pages

use leptos::*;

/// Top-level documentation sections reachable from the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocSection {
    Overview,
    Guides,
    Reference,
}

impl DocSection {
    pub fn title(self) -> &'static str {
        match self {
            DocSection::Overview => "Documentation",
            DocSection::Guides => "Guides",
            DocSection::Reference => "Reference",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            DocSection::Overview => {
                "Articles on cleaning and reshaping data with pandas, and on the C++ language and toolchain."
            }
            DocSection::Guides => {
                "Step-by-step walkthroughs: handling missing values, melting and pivoting frames, building C++ projects."
            }
            DocSection::Reference => {
                "Concise notes on individual pandas operations and C++ language features."
            }
        }
    }
}

#[component]
pub fn DocsPage(section: DocSection) -> impl IntoView {
    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">{section.title()}</h1>
                        <p class="text-xl text-gray-300">{section.summary()}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
