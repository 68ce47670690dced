use log::{debug, warn};
use web_sys::window;

use crate::config;

/// Crown glyph shown in the browser tab.
const CROWN_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='#D4AF37' stroke='#D4AF37' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z'/><path d='M5 20h14'/></svg>";

/// Process-wide document metadata the page writes to.
pub trait DocumentSink {
    fn set_title(&self, title: &str);
    /// Points the head's icon link at `href`, creating the link only if none exists.
    fn ensure_icon_link(&self, href: &str);
    fn set_theme_attribute(&self, value: &str);
}

pub fn favicon_href() -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(CROWN_SVG))
}

pub fn inject_metadata(document: &dyn DocumentSink) {
    document.set_title(config::PAGE_TITLE);
    document.ensure_icon_link(&favicon_href());
}

/// `DocumentSink` backed by the live browser document.
#[derive(Clone, Copy, Default)]
pub struct BrowserDocument;

impl DocumentSink for BrowserDocument {
    fn set_title(&self, title: &str) {
        match window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => warn!("No document available, title not set"),
        }
    }

    fn ensure_icon_link(&self, href: &str) {
        let Some(document) = window().and_then(|w| w.document()) else {
            warn!("No document available, favicon not set");
            return;
        };
        let Some(head) = document.head() else {
            warn!("Document has no <head>, favicon not set");
            return;
        };

        let existing = document.query_selector("link[rel*='icon']").ok().flatten();
        let link = match existing {
            Some(link) => link,
            None => match document.create_element("link") {
                Ok(link) => {
                    let _ = head.append_child(&link);
                    link
                }
                Err(_) => {
                    warn!("Failed to create favicon link");
                    return;
                }
            },
        };

        let _ = link.set_attribute("type", "image/svg+xml");
        let _ = link.set_attribute("rel", "shortcut icon");
        let _ = link.set_attribute("href", href);
        debug!("Favicon link updated");
    }

    fn set_theme_attribute(&self, value: &str) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute(config::THEME_ATTRIBUTE, value);
        } else {
            warn!("No document element, theme attribute not set");
        }
    }
}
