use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Wraps a page section and fades its content in the first time it scrolls
/// into view. Once revealed it stays revealed.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=section_ref
            class=format!("min-h-screen py-20 bg-black relative overflow-hidden {class}")
        >
            <div class=move || {
                if revealed.get() {
                    "relative z-10 animate-fade-in-up"
                } else {
                    "relative z-10 opacity-0"
                }
            }>{children()}</div>
        </section>
    }
}

/// Heading block shared by every section: badge, title and a short blurb.
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <div class="inline-flex items-center gap-3 bg-gradient-to-r from-blue-500/10 to-cyan-500/10 backdrop-blur-sm rounded-full px-6 py-3 border border-blue-500/20 mb-8">
                <span class="text-blue-400 font-semibold">{badge}</span>
            </div>
            <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-cyan-300 to-purple-400 bg-clip-text text-transparent">
                {title}
            </h2>
            <div class="w-32 h-1 bg-gradient-to-r from-blue-400 to-cyan-400 mx-auto mb-6 rounded-full"></div>
            {(!subtitle.is_empty())
                .then(|| {
                    view! {
                        <p class="text-base md:text-lg text-blue-200 max-w-3xl mx-auto leading-relaxed">
                            {subtitle}
                        </p>
                    }
                })}
        </div>
    }
}
