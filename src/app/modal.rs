use leptos::{either::Either, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub title: &'static str,
    pub source: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Full-screen viewer for a certificate or achievement. Clicking the backdrop
/// or the close button clears `selected`; clicking the image toggles zoom.
#[component]
pub fn DetailModal(selected: RwSignal<Option<Detail>>) -> impl IntoView {
    let (zoomed, set_zoomed) = signal(false);
    let close = move || {
        set_zoomed.set(false);
        selected.set(None);
    };

    move || match selected.get() {
        None => Either::Left(()),
        Some(detail) => Either::Right(view! {
            <div
                class="fixed inset-0 z-[60] flex items-center justify-center bg-black/80 backdrop-blur-sm p-4"
                on:click=move |_| close()
            >
                <div
                    class="relative max-w-3xl w-full bg-gray-900 rounded-3xl border border-blue-500/20 shadow-2xl overflow-hidden"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 z-10 p-2 rounded-full bg-black/60 text-gray-300 hover:text-white"
                        aria-label="Close"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                    <img
                        src=detail.image
                        alt=detail.title
                        class=move || {
                            if zoomed.get() {
                                "w-full max-h-[80vh] object-contain bg-black cursor-zoom-out"
                            } else {
                                "w-full max-h-96 object-contain bg-black cursor-zoom-in"
                            }
                        }
                        on:click=move |_| set_zoomed.update(|z| *z = !*z)
                    />
                    <div class="p-8">
                        <h3 class="text-3xl font-bold text-white mb-2">{detail.title}</h3>
                        <div class="flex items-center gap-4 text-blue-300 mb-4">
                            <span class="font-medium">{detail.source}</span>
                            <span class="text-gray-400">{detail.date}</span>
                        </div>
                        <p class="text-blue-300 leading-relaxed text-lg">{detail.description}</p>
                    </div>
                </div>
            </div>
        }),
    }
}
