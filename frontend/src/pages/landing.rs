use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::countdown::{self, CountdownEngine, SystemClock};
use crate::document::BrowserDocument;
use crate::lifecycle::{IntervalScheduler, PageSession, SessionCallbacks, WindowScroll};
use crate::state::{PageAction, PageState};
use crate::theme;
use crate::waitlist::{PendingSubmission, SubmissionService};

fn default_submissions() -> Rc<dyn SubmissionService> {
    Rc::new(PendingSubmission)
}

#[derive(Properties)]
pub struct LandingPageProps {
    #[prop_or_else(default_submissions)]
    pub submissions: Rc<dyn SubmissionService>,
}

impl PartialEq for LandingPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.submissions, &other.submissions)
    }
}

fn crown_icon(size: &'static str) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={size} height={size} viewBox="0 0 24 24"
            fill="currentColor" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <path d="m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z" />
            <path d="M5 20h14" />
        </svg>
    }
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let state = use_reducer_eq(PageState::default);

    // Metadata, scroll observer and countdown ticker live for as long as the page is mounted
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let on_scrolled = {
                    let state = state.clone();
                    Callback::from(move |scrolled| state.dispatch(PageAction::Scrolled(scrolled)))
                };
                let on_tick = Callback::from(move |remaining| state.dispatch(PageAction::Tick(remaining)));
                let engine = countdown::launch_target().map(|target| CountdownEngine::new(target, SystemClock));

                let session = PageSession::mount(
                    &BrowserDocument,
                    &WindowScroll,
                    &IntervalScheduler,
                    engine,
                    SessionCallbacks { on_scrolled, on_tick },
                );
                move || drop(session)
            },
            (),
        );
    }

    let toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle_theme(&BrowserDocument, state.theme);
            state.dispatch(PageAction::ThemeChanged(next));
        })
    };

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PageAction::EmailEdited(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let submissions = props.submissions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submissions.submit(&state.email_draft);
        })
    };

    html! {
        <div class="royal-page">
            <div class="shimmer-glow"></div>

            <nav class={state.nav_class()}>
                <div class="nav-content">
                    <div class="brand">
                        <div class="brand-crown">{crown_icon("22")}</div>
                        <div class="brand-text">
                            <span class="brand-name">{"Chai Royal"}</span>
                            <span class="brand-tagline">{"The Gold Standard"}</span>
                        </div>
                    </div>

                    <div class="nav-links">
                        <a href="#">{"Heritage"}</a>
                        <a href="#">{"Blends"}</a>
                        <a href="#">{"Concierge"}</a>
                    </div>

                    <button class="theme-toggle" onclick={toggle_theme}>
                        <div class={state.theme.knob_class()}>{state.theme.glyph()}</div>
                    </button>
                </div>
            </nav>

            <main class="hero">
                <div class="hero-badge">
                    <span>{"Est. 2026 • Private Collection"}</span>
                </div>

                <h1>
                    {"Brewing"}<br />
                    <span class="hero-accent">{"Royalty"}</span>
                </h1>

                <div class="countdown">
                    {
                        state.countdown.tiles().into_iter().map(|(label, value)| html! {
                            <div class="countdown-tile" key={label}>
                                <span class="countdown-value">{countdown::format_unit(value)}</span>
                                <span class="countdown-label">{label}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <p class="hero-subtitle">
                    {"Escape the ordinary with an instant tea premix crafted for the modern monarch. "}
                    {"Rich spices, premium leaves, and the legacy of India in every sip."}
                </p>

                <div class="waitlist">
                    <form class="waitlist-form" {onsubmit}>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter email for early access"
                            value={state.email_draft.clone()}
                            {oninput}
                        />
                        <button type="submit">
                            {"Join Waitlist"}
                            <span class="send-arrow">{"➤"}</span>
                        </button>
                    </form>
                </div>
            </main>

            <footer class="royal-footer">
                <div class="footer-grid">
                    <div class="footer-column">
                        <div class="footer-brand">
                            {crown_icon("20")}
                            <span>{"CHAI ROYAL"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Sourcing the finest leaves from the gardens of Assam and Darjeeling to bring the royal tea room experience to your home."}
                        </p>
                    </div>

                    <div class="footer-column">
                        <h4>{"Inquiries"}</h4>
                        <ul>
                            <li>{"✉ palace@chairoyal.com"}</li>
                            <li>{"☎ +91 1800 200 400"}</li>
                            <li>{"⌖ Jaipur, Rajasthan, India"}</li>
                        </ul>
                    </div>

                    <div class="footer-column social">
                        <h4>{"Social"}</h4>
                        <div class="social-links">
                            <span title="Instagram">{"Instagram"}</span>
                            <span title="Twitter">{"Twitter"}</span>
                            <span title="Facebook">{"Facebook"}</span>
                        </div>
                    </div>
                </div>

                <div class="footer-legal">
                    {"© 2026 The Royal Tea Company. All Rights Reserved."}
                </div>
            </footer>

            <style>
                {r#"
                    .royal-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        background: var(--bg-primary);
                        color: var(--text-primary);
                        transition: background 0.7s ease;
                    }

                    .shimmer-glow {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle at 50% 30%, rgba(212, 175, 55, 0.12), transparent 60%);
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        display: flex;
                        justify-content: center;
                        padding: 1.5rem;
                        box-sizing: border-box;
                        background: transparent;
                        transition: all 0.5s ease;
                    }

                    .top-nav.scrolled {
                        padding: 0.75rem 1.5rem;
                        background: color-mix(in srgb, var(--bg-primary) 80%, transparent);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(212, 175, 55, 0.1);
                    }

                    .nav-content {
                        width: 100%;
                        max-width: 80rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                    }

                    .brand-crown {
                        padding: 0.6rem;
                        border-radius: 50%;
                        background: var(--royal-gold);
                        color: #fff;
                        transition: transform 0.5s ease;
                    }

                    .brand:hover .brand-crown {
                        transform: rotate(360deg) scale(1.1);
                    }

                    .brand-text {
                        display: flex;
                        flex-direction: column;
                    }

                    .brand-name {
                        font-family: serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        font-style: italic;
                    }

                    .brand-tagline {
                        font-size: 8px;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        color: var(--royal-gold);
                        font-weight: 700;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        font-weight: 700;
                        opacity: 0.7;
                    }

                    .nav-links a {
                        color: inherit;
                        text-decoration: none;
                    }

                    .nav-links a:hover {
                        color: var(--royal-gold);
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                    }

                    .theme-toggle {
                        width: 3.5rem;
                        height: 1.75rem;
                        border-radius: 999px;
                        padding: 0 0.25rem;
                        display: flex;
                        align-items: center;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        cursor: pointer;
                    }

                    .toggle-knob {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.7rem;
                        color: #fff;
                        background: linear-gradient(135deg, #f3d77a, var(--royal-gold));
                        transition: transform 0.5s ease;
                    }

                    .toggle-knob.shifted {
                        transform: translateX(1.75rem);
                    }

                    .hero {
                        position: relative;
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                        z-index: 10;
                    }

                    .hero-badge {
                        padding: 0.4rem 1rem;
                        margin-bottom: 2rem;
                        border-radius: 999px;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        color: var(--royal-gold);
                        font-size: 9px;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        font-weight: 900;
                    }

                    .hero h1 {
                        font-family: serif;
                        font-size: clamp(3.75rem, 10vw, 8rem);
                        line-height: 0.85;
                        margin: 0 0 2rem;
                    }

                    .hero-accent {
                        font-style: italic;
                        font-weight: 400;
                        color: var(--royal-gold);
                    }

                    .countdown {
                        display: flex;
                        gap: 1.5rem;
                        margin-bottom: 3.5rem;
                    }

                    .countdown-tile {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        min-width: 80px;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        background: var(--tile-bg);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(212, 175, 55, 0.1);
                    }

                    .countdown-value {
                        font-family: serif;
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--royal-gold);
                    }

                    .countdown-label {
                        margin-top: 0.5rem;
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        font-weight: 700;
                        opacity: 0.4;
                    }

                    .hero-subtitle {
                        max-width: 42rem;
                        margin-bottom: 3rem;
                        font-size: 1.5rem;
                        font-style: italic;
                        font-weight: 300;
                        line-height: 1.6;
                        opacity: 0.7;
                    }

                    .waitlist {
                        width: 100%;
                        max-width: 32rem;
                        display: flex;
                        justify-content: center;
                    }

                    .waitlist-form {
                        width: 100%;
                        max-width: 28rem;
                        display: flex;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }

                    .waitlist-form input {
                        flex: 1;
                        padding: 1.25rem 1.5rem;
                        border: none;
                        outline: none;
                        background: #fff;
                        color: #000;
                    }

                    .waitlist-form button {
                        padding: 1.25rem 2rem;
                        border: none;
                        background: #2c1810;
                        color: #d4af37;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                    }

                    .waitlist-form button:hover {
                        background: #000;
                    }

                    .send-arrow {
                        margin-left: 0.5rem;
                    }

                    @media (max-width: 768px) {
                        .waitlist-form {
                            flex-direction: column;
                        }
                    }

                    .royal-footer {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 4rem 2.5rem 2rem;
                        background: #1a1512;
                        color: rgba(253, 250, 245, 0.8);
                    }

                    .footer-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                        padding-bottom: 3rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                    }

                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--royal-gold);
                        font-family: serif;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                    }

                    .footer-blurb {
                        font-size: 11px;
                        line-height: 1.6;
                        opacity: 0.5;
                    }

                    .footer-column h4 {
                        color: var(--royal-gold);
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }

                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        font-size: 11px;
                        opacity: 0.7;
                    }

                    .footer-column.social {
                        text-align: right;
                    }

                    .social-links {
                        display: flex;
                        justify-content: flex-end;
                        gap: 1.5rem;
                    }

                    .social-links span {
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }

                    .social-links span:hover {
                        color: var(--royal-gold);
                        transform: translateY(-0.25rem);
                    }

                    .footer-legal {
                        padding-top: 2rem;
                        text-align: center;
                        font-size: 9px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        opacity: 0.3;
                    }
                "#}
            </style>
        </div>
    }
}
