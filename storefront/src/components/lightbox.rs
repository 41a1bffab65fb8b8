//! Full-screen image viewer over a [`Lightbox`] signal.
//!
//! The owning page keeps the `RwSignal<Lightbox>` and opens it with
//! `viewer.update(|lb| lb.open(urls, index))`. This component renders
//! nothing while the viewer is closed. While it is open it is mounted on
//! `<body>` through a portal, holds the page scroll lock and listens for
//! keyboard shortcuts.

use std::sync::{Arc, Mutex};

use leptos::ev;
use leptos::portal::Portal;
use leptos::prelude::*;
use pods_viewer::input::{Action, ClickTarget};
use pods_viewer::scroll::{ScrollGuard, ScrollLock};
use pods_viewer::transform::Point;
use pods_viewer::Lightbox;

fn pointer(ev: &ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
pub fn LightboxOverlay(viewer: RwSignal<Lightbox>) -> impl IntoView {
    let scroll = expect_context::<ScrollLock>();
    let guard: Arc<Mutex<Option<ScrollGuard>>> = Arc::new(Mutex::new(None));

    // Hold the scroll lock exactly while open.
    let held = Arc::clone(&guard);
    Effect::new(move || {
        let open = viewer.with(Lightbox::is_open);
        let mut slot = held.lock().unwrap_or_else(|e| e.into_inner());
        match (open, slot.is_some()) {
            (true, false) => *slot = Some(scroll.acquire()),
            (false, true) => *slot = None,
            _ => {}
        }
    });
    on_cleanup(move || {
        drop(guard.lock().unwrap_or_else(|e| e.into_inner()).take());
    });

    let keys = window_event_listener(ev::keydown, move |ev| {
        if !viewer.with_untracked(Lightbox::is_open) {
            return;
        }
        let key = ev.key();
        if Action::from_key(&key).is_some() {
            ev.prevent_default();
            viewer.update(|lb| {
                lb.key(&key);
            });
        }
    });
    on_cleanup(move || keys.remove());

    let control = move |action: Action| {
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            viewer.update(|lb| {
                lb.click(ClickTarget::Control);
                lb.dispatch(action);
            });
        }
    };

    let thumbnail = move |i: usize| {
        view! {
            <button
                class="lightbox-thumb"
                class:active=move || viewer.with(|lb| lb.index() == i)
                on:click=control(Action::GoTo(i))
            >
                <img
                    src=move || viewer.with(|lb| lb.thumbnail_src(i).unwrap_or_default().to_string())
                    alt=format!("Thumbnail {}", i + 1)
                    on:error=move |_| viewer.update(|lb| {
                        lb.thumbnail_failed(i);
                    })
                />
            </button>
        }
    };

    view! {
        <Portal>
            <Show when=move || viewer.with(Lightbox::is_open)>
                <div
                    class="lightbox"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| viewer.update(|lb| {
                        lb.click(ClickTarget::Backdrop);
                    })
                >
                    <div class="lightbox-toolbar">
                        <Show when=move || viewer.with(Lightbox::show_navigation)>
                            <span class="lightbox-counter">
                                {move || viewer.with(Lightbox::counter_label)}
                            </span>
                        </Show>
                        <button on:click=control(Action::ZoomOut) title="Zoom out (-)">"\u{2212}"</button>
                        <button on:click=control(Action::ZoomIn) title="Zoom in (+)">"+"</button>
                        <button on:click=control(Action::Rotate) title="Rotate (R)">"\u{27f3}"</button>
                        <button on:click=control(Action::Close) title="Close (Esc)">"\u{d7}"</button>
                    </div>

                    <Show when=move || viewer.with(Lightbox::show_navigation)>
                        <button class="lightbox-prev" on:click=control(Action::Previous)>"\u{2039}"</button>
                        <button class="lightbox-next" on:click=control(Action::Next)>"\u{203a}"</button>
                    </Show>

                    // The stage belongs to the image: clicks here never reach the backdrop.
                    <div
                        class="lightbox-stage"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            viewer.update(|lb| {
                                lb.click(ClickTarget::Image);
                            });
                        }
                        on:mousemove=move |ev: ev::MouseEvent| viewer.update(|lb| lb.pointer_move(pointer(&ev)))
                        on:mouseup=move |_| viewer.update(Lightbox::pointer_up)
                        on:mouseleave=move |_| viewer.update(Lightbox::pointer_up)
                    >
                        <img
                            src=move || viewer.with(|lb| lb.current_src().unwrap_or_default().to_string())
                            alt=move || viewer.with(Lightbox::alt_text)
                            draggable="false"
                            style:transform=move || viewer.with(Lightbox::css_transform)
                            style:transition=move || viewer.with(Lightbox::css_transition)
                            style:cursor=move || viewer.with(Lightbox::cursor)
                            on:dblclick=move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                viewer.update(|lb| {
                                    lb.dispatch(Action::DoubleClick);
                                });
                            }
                            on:mousedown=move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                viewer.update(|lb| lb.pointer_down(pointer(&ev)));
                            }
                            on:error=move |_| viewer.update(|lb| {
                                lb.main_image_failed();
                            })
                        />
                    </div>

                    <Show when=move || viewer.with(Lightbox::show_thumbnails)>
                        <div class="lightbox-thumbs">
                            {move || (0..viewer.with(Lightbox::len)).map(thumbnail).collect_view()}
                        </div>
                    </Show>
                </div>
            </Show>
        </Portal>
    }
}
