//! Routing shell: router, navbar, and the fixed stack of page sections.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::config::SiteConfig;
use crate::nav::Navbar;
use crate::routes::Anchor;
use crate::sections::*;

/// Content sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    Quotes,
    AboutUs,
    FoodTracking,
    FoodSpecificationForm,
    Stats,
    Footer,
}

impl PageSection {
    pub const ALL: [PageSection; 7] = [
        PageSection::Hero,
        PageSection::Quotes,
        PageSection::AboutUs,
        PageSection::FoodTracking,
        PageSection::FoodSpecificationForm,
        PageSection::Stats,
        PageSection::Footer,
    ];

    /// In-page anchor wrapping this section, if any.
    pub const fn anchor(self) -> Option<Anchor> {
        match self {
            PageSection::Hero => Some(Anchor::Home),
            PageSection::AboutUs => Some(Anchor::About),
            PageSection::FoodTracking => Some(Anchor::Track),
            PageSection::FoodSpecificationForm => Some(Anchor::Form),
            PageSection::Footer => Some(Anchor::Contact),
            PageSection::Quotes | PageSection::Stats => None,
        }
    }

    /// Everything but the footer grows inside the main column.
    pub const fn in_main(self) -> bool {
        !matches!(self, PageSection::Footer)
    }

    fn render(self) -> AnyView {
        match self {
            PageSection::Hero => view! { <Hero /> }.into_any(),
            PageSection::Quotes => view! { <Quotes /> }.into_any(),
            PageSection::AboutUs => view! { <AboutUs /> }.into_any(),
            PageSection::FoodTracking => view! { <FoodTracking /> }.into_any(),
            PageSection::FoodSpecificationForm => view! { <FoodSpecificationForm /> }.into_any(),
            PageSection::Stats => view! { <Stats /> }.into_any(),
            PageSection::Footer => view! { <Footer /> }.into_any(),
        }
    }

    fn render_anchored(self) -> AnyView {
        match self.anchor() {
            Some(anchor) => view! { <div id=anchor.id()>{self.render()}</div> }.into_any(),
            None => self.render(),
        }
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    let main_sections = PageSection::ALL
        .into_iter()
        .filter(|section| section.in_main())
        .map(PageSection::render_anchored)
        .collect_view();
    let trailing = PageSection::ALL
        .into_iter()
        .filter(|section| !section.in_main())
        .map(PageSection::render_anchored)
        .collect_view();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Navbar />
                <main class="flex-grow">{main_sections}</main>
                {trailing}
            </div>
        </Router>
    }
}
