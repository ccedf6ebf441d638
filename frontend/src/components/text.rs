use yew::prelude::*;

use crate::animation::easing::{counter_value, format_thousands, Easing, Rounding};
use crate::animation::reveal::RevealLatch;
use crate::config::{COUNTER_DURATION_MS, SCROLL_COUNTER_DURATION_MS, SCROLL_COUNTER_THRESHOLD};
use crate::signals::{use_cycle, use_in_view, use_tween, InViewOptions};

#[derive(Properties, PartialEq)]
pub struct TextLoopProps {
    pub phrases: Vec<AttrValue>,
    #[prop_or(2500)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextLoop)]
pub fn text_loop(props: &TextLoopProps) -> Html {
    let index = use_cycle(props.phrases.len(), props.interval_ms);
    let displayed = props.phrases.get(index).cloned().unwrap_or(AttrValue::Static(""));

    html! {
        <span class={classes!("text-loop", props.class.clone())}>
            // Keyed on the phrase so the fade-in restarts on every change.
            <span key={displayed.to_string()} class="text-loop-phrase">{displayed.to_string()}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: i64,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or(AttrValue::Static(""))]
    pub prefix: AttrValue,
    #[prop_or(AttrValue::Static(""))]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up from zero as soon as it mounts.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let progress = use_tween(true, props.duration_ms);
    let value = counter_value(0, props.value, progress, Easing::OutCubic, Rounding::Nearest);

    html! {
        <span class={props.class.clone()}>
            {format!("{}{}{}", props.prefix, format_thousands(value), props.suffix)}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollCounterProps {
    pub end: i64,
    #[prop_or(0)]
    pub start: i64,
    #[prop_or(SCROLL_COUNTER_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or(AttrValue::Static(""))]
    pub prefix: AttrValue,
    #[prop_or(AttrValue::Static(""))]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up once, the first time half of it is on screen.
#[function_component(ScrollCounter)]
pub fn scroll_counter(props: &ScrollCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::threshold(SCROLL_COUNTER_THRESHOLD));
    let latch = use_mut_ref(RevealLatch::default);
    let started = latch.borrow_mut().observe(in_view);
    let progress = use_tween(started, props.duration_ms);
    let value = if started {
        counter_value(props.start, props.end, progress, Easing::OutQuart, Rounding::Floor)
    } else {
        props.start
    };

    html! {
        <div ref={node} class={props.class.clone()}>
            {format!("{}{}{}", props.prefix, format_thousands(value), props.suffix)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HighlightOnHoverProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HighlightOnHover)]
pub fn highlight_on_hover(props: &HighlightOnHoverProps) -> Html {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <span class={classes!("highlight-hover", props.class.clone())} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <span class="highlight-hover-bg" aria-hidden="true"
                style={format!("opacity: {};", if *hovered { 1 } else { 0 })}></span>
            <span class="highlight-hover-content">{ for props.children.iter() }</span>
        </span>
    }
}
