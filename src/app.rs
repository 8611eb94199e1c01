use yew::prelude::*;

use crate::counter::{Counter, CounterAction};

pub const HEADER_TEXT: &str = "DevOps Challenge - React App";
pub const CAPTION_TEXT: &str = "Simple React app for the Converty DevOps challenge";

#[derive(Properties, PartialEq)]
pub struct CounterButtonProps {
    pub counter: Counter,
    pub onclick: Callback<MouseEvent>,
}

/// Render step: draws the button for a given counter value. Holds no state.
#[function_component(CounterButton)]
pub fn counter_button(props: &CounterButtonProps) -> Html {
    html! {
        <button class="counter" onclick={props.onclick.clone()}>{ props.counter.label() }</button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterCardViewProps {
    pub counter: Counter,
    pub onclick: Callback<MouseEvent>,
}

/// Button plus caption for a given counter value. Holds no state.
#[function_component(CounterCardView)]
pub fn counter_card_view(props: &CounterCardViewProps) -> Html {
    html! {
        <div class="card">
            <CounterButton counter={props.counter} onclick={props.onclick.clone()} />
            <p class="caption">{ CAPTION_TEXT }</p>
        </div>
    }
}

/// One counter plus its caption. Each mounted card owns its own state cell.
#[function_component(CounterCard)]
pub fn counter_card() -> Html {
    let counter = use_reducer(Counter::default);

    let on_increment = {
        let counter = counter.dispatcher();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Increment))
    };

    html! {
        <CounterCardView counter={*counter} onclick={on_increment} />
    }
}

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page frame: the static header above whatever goes in `<main>`.
#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    html! {
        <div class="app-container">
            <header>
                <h1>{ HEADER_TEXT }</h1>
            </header>
            <main>
                { props.children.clone() }
            </main>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppShell>
            <CounterCard />
        </AppShell>
    }
}
