use leptos::{either::*, prelude::*};
use leptos_use::use_window_scroll;

use crate::sections::{active_section, is_scrolled, probe_position, SectionBounds, NAV_LINKS};

use super::{scroll_to_section, scroll_to_top, section_element, OWNER};

fn measure_sections() -> Vec<SectionBounds> {
    NAV_LINKS
        .iter()
        .filter_map(|link| {
            let el = section_element(link.id)?;
            Some(SectionBounds {
                id: link.id.to_string(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<&'static str>);

    Effect::new(move |_| {
        let y = scroll_y.get();
        let sections = measure_sections();
        // keep the last active link when the probe falls between sections
        if let Some(id) = active_section(probe_position(y), &sections) {
            let id = NAV_LINKS.iter().find(|l| l.id == id).map(|l| l.id);
            if id != active.get_untracked() {
                set_active.set(id);
            }
        }
    });

    let go_to = move |id: &'static str| {
        if scroll_to_section(id) {
            set_menu_open.set(false);
        }
    };

    let link_class = move |id: &'static str, mobile: bool| {
        let base = if mobile {
            "w-full text-left px-4 py-3 rounded-xl font-medium transition-all duration-300"
        } else {
            "relative px-4 py-2 rounded-xl font-medium transition-all duration-300"
        };
        let state = if active.get() == Some(id) {
            "text-white bg-gradient-to-r from-blue-500/20 to-cyan-400/20 border border-blue-400/30 shadow-lg shadow-blue-500/20"
        } else {
            "text-gray-300 hover:text-white hover:bg-gray-800/50 border border-transparent"
        };
        format!("{base} {state}")
    };

    view! {
        <header class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed w-full z-50 transition-all duration-500 bg-black/90 backdrop-blur-xl border-b border-blue-500/20 shadow-lg shadow-blue-500/10 py-3"
            } else {
                "fixed w-full z-50 transition-all duration-500 bg-black/70 backdrop-blur-md py-4"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl flex justify-between items-center">
                <a
                    href="#"
                    class="flex items-center gap-2 text-2xl font-bold bg-gradient-to-r from-blue-400 via-cyan-300 to-blue-500 bg-clip-text text-transparent"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_top();
                    }
                >
                    <span class="text-blue-400">"</>"</span>
                    <span>{OWNER}</span>
                    <span class="text-cyan-400 animate-pulse">"✦"</span>
                </a>

                <nav class="hidden md:block">
                    <ul class="flex items-center space-x-1 lg:space-x-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <li>
                                        <button
                                            class=move || link_class(id, false)
                                            on:click=move |_| go_to(id)
                                        >
                                            {link.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <button
                    class="md:hidden p-2 rounded-xl bg-gray-800/50 border border-gray-700 hover:border-blue-400/50 text-blue-300 hover:text-blue-400 focus:outline-none focus:ring-2 focus:ring-blue-500/50 transition-all duration-300"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle navigation menu"
                >
                    {move || if menu_open.get() { Either::Left("✕") } else { Either::Right("☰") }}
                </button>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "md:hidden absolute w-full left-0 transition-all duration-500 max-h-96 opacity-100 bg-black/95 backdrop-blur-xl border-b border-blue-500/20"
                } else {
                    "md:hidden absolute w-full left-0 transition-all duration-500 max-h-0 opacity-0 overflow-hidden"
                }
            }>
                <nav class="container mx-auto px-4 py-4">
                    <ul class="space-y-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <li>
                                        <button
                                            class=move || link_class(id, true)
                                            on:click=move |_| go_to(id)
                                        >
                                            <span class="flex items-center gap-2">
                                                {link.label}
                                                {move || {
                                                    (active.get() == Some(id))
                                                        .then(|| {
                                                            view! {
                                                                <span class="text-blue-400 animate-pulse">"✦"</span>
                                                            }
                                                        })
                                                }}
                                            </span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
