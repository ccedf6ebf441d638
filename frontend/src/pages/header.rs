use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::{DESKTOP_MIN_WIDTH_PX, HEADER_SCROLLED_PX, NAV_DOTS_THRESHOLD, SITE_NAME};
use crate::pages::content::{NavSection, NAV_CTA, NAV_SECTIONS, NAV_SECTION_IDS};
use crate::signals::env::{set_body_class, window};
use crate::signals::{scroll_to, use_active_section, use_scroll};

const NAV_OPEN_CLASS: &str = "nav-open";

fn closes_menu(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

fn is_desktop(viewport_width: f64) -> bool {
    viewport_width >= DESKTOP_MIN_WIDTH_PX
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let scroll = use_scroll();
    let is_scrolled = scroll.scroll_y > HEADER_SCROLLED_PX;
    // Zero width means no sample yet; treat as mobile until the first one.
    let desktop = is_desktop(scroll.viewport_width);

    // Escape closes the menu from anywhere on the page.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = window().ok();
                let keydown_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if closes_menu(&e.key()) {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(window) = &window {
                    if let Err(err) =
                        window.add_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref())
                    {
                        debug!("keydown listener not attached: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window
                            .remove_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref());
                    }
                    set_body_class(NAV_OPEN_CLASS, false);
                }
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |open| {
                set_body_class(NAV_OPEN_CLASS, *open);
                || ()
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let navigate = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to(section);
        })
    };

    let reload = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Ok(window) = window() {
            let _ = window.location().reload();
        }
    });

    let tab_index = if *menu_open { "0" } else { "-1" };

    html! {
        <>
            <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
                <div class="header-content">
                    <button class="header-logo" onclick={reload} aria-label="Website Expertz Home">
                        <img src="/logo.png" alt="WebsiteExpertz Logo" width="120" height="40" />
                        <span class="header-logo-text">{SITE_NAME}</span>
                    </button>

                    <nav class="desktop-nav">
                        <ul class="nav-links">
                            { for NAV_SECTIONS.iter().map(|item| html! {
                                <li key={item.id}>
                                    <button class="nav-link" onclick={navigate(item.id)}>{item.label}</button>
                                </li>
                            }) }
                        </ul>
                        if desktop {
                            <button class="nav-cta" onclick={navigate(NAV_CTA.id)}>{NAV_CTA.label}</button>
                        }
                    </nav>

                    <button class={classes!("nav-toggle", (*menu_open).then(|| "open"))} onclick={toggle_menu}
                        aria-label="Toggle navigation menu" aria-expanded={menu_open.to_string()} type="button">
                        <span class="nav-toggle-line"></span>
                        <span class="nav-toggle-line"></span>
                        <span class="nav-toggle-line"></span>
                    </button>
                </div>
            </header>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))} role="navigation"
                aria-hidden={(!*menu_open).to_string()} aria-label="Mobile navigation menu">
                <ul class="nav-links" role="list">
                    { for NAV_SECTIONS.iter().map(|item| mobile_item(item, navigate(item.id), tab_index)) }
                    <li role="listitem" class="mobile-menu-cta">
                        <button class="nav-cta" onclick={navigate(NAV_CTA.id)} tabindex={tab_index} aria-label={NAV_CTA.label}>
                            <span aria-hidden="true">{NAV_CTA.icon}</span>
                            <span>{NAV_CTA.label}</span>
                        </button>
                    </li>
                </ul>
            </div>

            <div class={classes!("mobile-menu-overlay", (*menu_open).then(|| "open"))} onclick={close_menu}></div>
        </>
    }
}

fn mobile_item(item: &NavSection, onclick: Callback<MouseEvent>, tab_index: &'static str) -> Html {
    html! {
        <li key={item.id} role="listitem">
            <button class="mobile-nav-link" onclick={onclick} tabindex={tab_index}
                aria-label={format!("Navigate to {} section", item.label)}>
                <span class="nav-icon" aria-hidden="true">{item.icon}</span>
                <span>{item.label}</span>
            </button>
        </li>
    }
}

/// Dot per section along the right edge; the section most recently 40% in view is filled.
#[function_component(FloatingNavDots)]
pub fn floating_nav_dots() -> Html {
    let active = use_active_section(NAV_SECTION_IDS, NAV_DOTS_THRESHOLD);

    html! {
        <nav class="floating-nav-dots" aria-label="Section navigation">
            { for NAV_SECTIONS.iter().map(|item| {
                let is_active = active.as_deref() == Some(item.id);
                let section = item.id;
                html! {
                    <button key={item.id}
                        class={classes!("nav-dot", is_active.then(|| "active"))}
                        onclick={Callback::from(move |_: MouseEvent| { scroll_to(section); })}
                        aria-label={format!("Scroll to {}", item.label)}
                        aria-current={is_active.then(|| "true")}>
                        <span class="nav-dot-label">{item.label}</span>
                    </button>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_menu() {
        assert!(closes_menu("Escape"));
        assert!(closes_menu("Esc"));
        assert!(!closes_menu("Enter"));
    }

    #[test]
    fn desktop_starts_at_breakpoint() {
        assert!(!is_desktop(0.0));
        assert!(!is_desktop(1023.0));
        assert!(is_desktop(1024.0));
    }
}
