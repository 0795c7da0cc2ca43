//! Fixed top app bar with the navigation drawer.
//!
//! DESIGN
//! ======
//! The header owns its `DrawerState` in a component-local signal; only the
//! handlers built by `toggle_drawer` mutate it. The menu is rendered from
//! `routes::menu_entries`, the same table the router resolves against.

#[cfg(test)]
#[path = "app_header_test.rs"]
mod app_header_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{self, RouteEntry};
use crate::state::drawer::{DrawerSide, DrawerState};
use crate::util::assets::Asset;

/// Build an event handler that sets `side` to `open` when invoked.
pub fn toggle_drawer<E: 'static>(
    drawer: RwSignal<DrawerState>,
    side: DrawerSide,
    open: bool,
) -> impl Fn(E) + Copy + 'static {
    move |_: E| drawer.update(|d| d.set(side, open))
}

/// App bar: logo on the left, "Controle de Acesso" trigger on the right.
#[component]
pub fn AppHeader() -> impl IntoView {
    let drawer = RwSignal::new(DrawerState::default());
    let is_open = move || drawer.get().is_open(DrawerSide::Right);
    let any_open = move || drawer.get().any_open();
    let drawer_class = format!("drawer drawer--{}", DrawerSide::Right.as_str());
    let drawer_ref = NodeRef::<leptos::html::Aside>::new();
    let logo = Asset::Logo;

    // The open drawer takes focus; Escape is handled on it.
    Effect::new(move || {
        if is_open() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = drawer_ref.get() {
                    let _ = el.focus();
                }
            }
        }
    });

    view! {
        <header class="app-header">
            <nav class="app-header__toolbar">
                <img class="app-header__logo" alt=logo.alt() src=logo.url() width="80"/>
                <div class="app-header__actions">
                    <button
                        class="app-header__trigger"
                        aria-expanded=move || is_open().to_string()
                        on:click=toggle_drawer(drawer, DrawerSide::Right, true)
                    >
                        <span class="app-header__title">"Controle de Acesso"</span>
                    </button>
                </div>
            </nav>

            <Show when=any_open>
                <div class="drawer__backdrop" on:click=move |_| drawer.set(DrawerState::default())></div>
            </Show>
            <Show when=is_open>
                <aside
                    class=drawer_class.clone()
                    node_ref=drawer_ref
                    role="button"
                    tabindex="0"
                    on:click=toggle_drawer(drawer, DrawerSide::Right, false)
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            drawer.update(|d| d.set(DrawerSide::Right, false));
                        }
                    }
                >
                    <DrawerMenu/>
                </aside>
            </Show>
        </header>
    }
}

/// Destination list. Clicks bubble to the drawer, which closes it.
#[component]
fn DrawerMenu() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <ul class="drawer__list">
            {routes::menu_entries()
                .iter()
                .map(|entry: &'static RouteEntry| {
                    let active = move || routes::resolve(&pathname.get()) == Some(entry.page);
                    view! {
                        <li class="drawer__item" class:drawer__item--active=active>
                            <A href=entry.path>{entry.label}</A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
