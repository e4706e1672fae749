use yew::prelude::*;

use crate::badge::BadgePill;
use crate::content::{
    BADGES, BADGE_ROW_CLASSES, CARD_CLASSES, CARD_HOVER_CLASS, DESCRIPTION, DESCRIPTION_CLASSES,
    HEADING, HEADING_CLASSES, SCREEN_CLASSES, WRAPPER_CLASSES,
};

#[derive(Properties, PartialEq)]
pub struct PageProps {
    /// Pins the card in its hovered (scaled) look without a pointer over it.
    #[prop_or_default]
    pub hover: bool,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let card = classes!(CARD_CLASSES, props.hover.then_some(CARD_HOVER_CLASS));

    html! {
        <div class={SCREEN_CLASSES}>
            <div class={WRAPPER_CLASSES}>
                <div class={card}>
                    <h1 class={HEADING_CLASSES}>{HEADING}</h1>
                    <p class={DESCRIPTION_CLASSES}>{DESCRIPTION}</p>
                    <div class={BADGE_ROW_CLASSES}>
                        { for BADGES.iter().map(|badge| html! { <BadgePill badge={*badge} /> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Page root mounted by `main`. Takes no props.
#[function_component(App)]
pub fn app() -> Html {
    html! { <Page /> }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
