use yew::prelude::*;

use crate::content::BADGE_CLASSES;

/// A technology label with its pastel color pair, both given as Tailwind classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Badge {
    pub const fn new(label: &'static str, background: &'static str, foreground: &'static str) -> Self {
        Self { label, background, foreground }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgePillProps {
    pub badge: Badge,
}

#[function_component(BadgePill)]
pub fn badge_pill(props: &BadgePillProps) -> Html {
    let badge = props.badge;
    html! {
        <div class={classes!(badge.background, badge.foreground, BADGE_CLASSES)}>
            {badge.label}
        </div>
    }
}
