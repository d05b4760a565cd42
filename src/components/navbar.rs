use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SCROLL_THRESHOLD;
use crate::Route;

const NAV_LINKS: [(&str, &str); 2] = [("#portfolio", "Portfólio"), ("#orcamento", "Orçamento")];

/// Remembers which side of the scroll threshold the page is on so the
/// header only re-renders when the offset actually crosses it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    scrolled: bool,
}

impl ScrollTracker {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns true when `offset` moved the page across the threshold.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let tracker = use_mut_ref(ScrollTracker::default);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    // Page may be restored mid-scroll on reload
                    if tracker.borrow_mut().update(window.scroll_y().unwrap_or(0.0)) {
                        is_scrolled.set(tracker.borrow().is_scrolled());
                    }

                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        let mut tracker = tracker.borrow_mut();
                        if tracker.update(offset) {
                            is_scrolled.set(tracker.is_scrolled());
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not watch scroll position: {:?}", e);
                    }

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation must still happen, so no prevent_default here
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", if *is_scrolled { "glass-card scrolled" } else { "transparent" })}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: all 0.5s ease;
                        animation: slideDown 0.6s ease-out;
                    }
                    .site-header.transparent {
                        background: transparent;
                    }
                    .site-header.scrolled {
                        padding: 1rem 0;
                        border-radius: 0;
                    }
                    @keyframes slideDown {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        font-family: var(--font-display);
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: var(--foreground);
                        transition: color 0.3s ease;
                    }
                    .nav-logo:hover .nav-logo-mark {
                        color: var(--primary);
                    }
                    .nav-logo-role {
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: var(--muted-foreground);
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: -4px;
                        left: 0;
                        width: 0;
                        height: 2px;
                        background: var(--primary);
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover {
                        color: var(--foreground);
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .nav-cta {
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .nav-cta:hover {
                        box-shadow: 0 10px 25px var(--primary-glow);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--foreground);
                        font-size: 1.5rem;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .nav-logo-role {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            margin: 0.5rem 1rem 0;
                            padding: 1.5rem;
                            border-radius: 1rem;
                            animation: fadeIn 0.3s ease;
                        }
                        .mobile-menu .nav-link {
                            font-size: 1.125rem;
                        }
                        .mobile-menu .nav-cta {
                            margin-top: 0.5rem;
                            text-align: center;
                            padding: 0.75rem 1.25rem;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"MC"}</span>
                    <span class="nav-logo-role">{"Editor de Vídeo"}</span>
                </Link<Route>>

                <nav class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a key={*href} href={*href} class="nav-link">{*label}</a>
                        }).collect::<Html>()
                    }
                    <a href="#orcamento" class="nav-cta">{"Solicitar Orçamento"}</a>
                </nav>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <nav class={classes!("mobile-menu", "glass-card", (*menu_open).then(|| "open"))}>
                {
                    NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }).collect::<Html>()
                }
                <a href="#orcamento" class="nav-cta" onclick={close_menu}>
                    {"Solicitar Orçamento"}
                </a>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_transparent() {
        assert!(!ScrollTracker::default().is_scrolled());
    }

    #[test]
    fn toggles_once_per_crossing() {
        let mut tracker = ScrollTracker::default();

        assert!(!tracker.update(10.0));
        assert!(!tracker.update(SCROLL_THRESHOLD));
        assert!(tracker.update(SCROLL_THRESHOLD + 1.0));
        assert!(tracker.is_scrolled());
        assert!(!tracker.update(400.0));
        assert!(!tracker.update(900.0));

        assert!(tracker.update(20.0));
        assert!(!tracker.is_scrolled());
        assert!(!tracker.update(0.0));
    }

    #[test]
    fn oscillation_below_threshold_never_toggles() {
        let mut tracker = ScrollTracker::default();
        let changes = [12.0, 30.0, 49.0, 31.0, 48.5, 50.0, 5.0]
            .into_iter()
            .filter(|offset| tracker.update(*offset))
            .count();
        assert_eq!(changes, 0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn oscillation_above_threshold_toggles_once() {
        let mut tracker = ScrollTracker::default();
        let changes = [120.0, 60.0, 51.0, 300.0, 75.0]
            .into_iter()
            .filter(|offset| tracker.update(*offset))
            .count();
        assert_eq!(changes, 1);
        assert!(tracker.is_scrolled());
    }
}
