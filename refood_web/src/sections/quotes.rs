use leptos::prelude::*;

struct Quote {
    text: &'static str,
    author: &'static str,
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "If you can't feed a hundred people, then feed just one.",
        author: "Mother Teresa",
    },
    Quote {
        text: "Wasting food is like stealing from the table of the poor.",
        author: "Pope Francis",
    },
    Quote {
        text: "There are people in the world so hungry that God cannot appear to them except in the form of bread.",
        author: "Mahatma Gandhi",
    },
];

#[component]
pub fn Quotes() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4 grid gap-8 md:grid-cols-3">
                {QUOTES
                    .iter()
                    .map(|quote| {
                        view! {
                            <blockquote class="p-6 rounded-xl bg-pink-50 border-l-4 border-pink-600 shadow-sm">
                                <p class="text-lg italic text-gray-700">"“" {quote.text} "”"</p>
                                <footer class="mt-4 text-sm font-semibold text-pink-700">"— " {quote.author}</footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
