use std::rc::Rc;

use yew::Reducible;

use crate::countdown::Countdown;
use crate::theme::Theme;

/// Everything the landing page renders from. Lives only as long as the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub email_draft: String,
    pub is_scrolled: bool,
    pub countdown: Countdown,
}

pub enum PageAction {
    ThemeChanged(Theme),
    EmailEdited(String),
    Scrolled(bool),
    Tick(Countdown),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::ThemeChanged(theme) => next.theme = theme,
            PageAction::EmailEdited(email) => next.email_draft = email,
            PageAction::Scrolled(scrolled) => next.is_scrolled = scrolled,
            PageAction::Tick(countdown) => next.countdown = countdown,
        }
        next.into()
    }
}

impl PageState {
    pub fn nav_class(&self) -> &'static str {
        if self.is_scrolled {
            "top-nav scrolled"
        } else {
            "top-nav"
        }
    }
}
