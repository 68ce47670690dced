use std::fmt;

use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::document::DocumentSink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the document's theme attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn knob_class(self) -> &'static str {
        match self {
            Theme::Light => "toggle-knob",
            Theme::Dark => "toggle-knob shifted",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flips `current` and publishes the result on the document.
pub fn toggle_theme(document: &dyn DocumentSink, current: Theme) -> Theme {
    let next = current.toggled();
    document.set_theme_attribute(next.as_str());
    info!("Theme switched to {}", next);
    next
}

/// Colour variables the rest of the page reads; dark values apply under `data-theme="dark"`.
#[function_component(ThemeVariables)]
pub fn theme_variables() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg-primary: #fdfaf5;
                --text-primary: #2c1810;
                --royal-gold: #d4af37;
                --tile-bg: rgba(255, 255, 255, 0.4);
            }

            html[data-theme="dark"] {
                --bg-primary: #120d0a;
                --text-primary: #fdfaf5;
                --tile-bg: rgba(0, 0, 0, 0.2);
            }

            body {
                margin: 0;
                background: var(--bg-primary);
                color: var(--text-primary);
                transition: background 0.7s ease, color 0.7s ease;
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::MemoryDocument;

    #[test]
    fn toggling_twice_restores_the_theme() {
        let document = MemoryDocument::default();
        let start = Theme::default();

        let once = toggle_theme(&document, start);
        assert_eq!(once, Theme::Dark);
        assert_eq!(document.theme.borrow().as_deref(), Some("dark"));

        let twice = toggle_theme(&document, once);
        assert_eq!(twice, start);
        assert_eq!(document.theme.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn knob_shifts_only_in_dark_mode() {
        assert!(!Theme::Light.knob_class().contains("shifted"));
        assert!(Theme::Dark.knob_class().contains("shifted"));
    }
}
