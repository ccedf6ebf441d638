use yew::prelude::*;

use crate::animation::reveal::{glyph, stagger_delay, Direction, Reveal, RevealLatch, Trigger};
use crate::config::{REVEAL_DISTANCE_PX, REVEAL_DURATION_S, REVEAL_THRESHOLD};
use crate::signals::{use_in_view, InViewOptions};

/// Visibility of `node` passed through a reveal latch.
#[hook]
fn use_revealed(node: NodeRef, options: InViewOptions, trigger: Trigger) -> bool {
    let in_view = use_in_view(node, options);
    let latch = use_mut_ref(|| RevealLatch::new(trigger));
    let mut latch = latch.borrow_mut();
    latch.retarget(trigger);
    let shown = latch.observe(in_view);
    shown
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(REVEAL_DISTANCE_PX)]
    pub distance: f64,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(REVEAL_DURATION_S)]
    pub duration: f64,
    #[prop_or_default]
    pub trigger: Trigger,
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or("0px")]
    pub root_margin: &'static str,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let options = InViewOptions { threshold: props.threshold, root_margin: props.root_margin };
    let shown = use_revealed(node.clone(), options, props.trigger);

    let reveal = Reveal {
        direction: props.direction,
        distance: props.distance,
        duration_s: props.duration,
        delay_s: props.delay,
    };

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={reveal.style(shown)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub trigger: Trigger,
}

/// Word-by-word rise, 0.1s apart.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_revealed(node.clone(), InViewOptions::threshold(REVEAL_THRESHOLD), props.trigger);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.text.split_whitespace().enumerate().map(|(index, word)| {
                let style = format!(
                    "display: inline-block; transform: {}; opacity: {}; transition: all 0.6s ease {}s;",
                    if shown { "translateY(0)" } else { "translateY(100%)" },
                    if shown { 1 } else { 0 },
                    stagger_delay(props.delay, index, 0.1),
                );
                html! { <span key={index} style={style}>{word}{"\u{a0}"}</span> }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitTextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.05)]
    pub delay_step: f64,
    #[prop_or(0.15)]
    pub threshold: f64,
    #[prop_or_default]
    pub trigger: Trigger,
}

/// Character-by-character reveal.
#[function_component(SplitTextReveal)]
pub fn split_text_reveal(props: &SplitTextRevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_revealed(node.clone(), InViewOptions::threshold(props.threshold), props.trigger);

    html! {
        <span ref={node} class={classes!("split-text", props.class.clone())}>
            { for props.text.chars().enumerate().map(|(index, ch)| {
                let style = format!(
                    "transform: {}; opacity: {}; transition-delay: {}s;",
                    if shown { "translateY(0)" } else { "translateY(100%)" },
                    if shown { 1 } else { 0 },
                    stagger_delay(0.0, index, props.delay_step),
                );
                html! { <span key={index} class="split-char" style={style}>{glyph(ch)}</span> }
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggeredRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub stagger: f64,
    #[prop_or(30.0)]
    pub distance: f64,
    #[prop_or_default]
    pub trigger: Trigger,
}

/// Children rise one after another once the container is in view.
#[function_component(StaggeredReveal)]
pub fn staggered_reveal(props: &StaggeredRevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_revealed(node.clone(), InViewOptions::threshold(REVEAL_THRESHOLD), props.trigger);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| {
                let reveal = Reveal {
                    direction: Direction::Up,
                    distance: props.distance,
                    duration_s: REVEAL_DURATION_S,
                    delay_s: stagger_delay(0.0, index, props.stagger),
                };
                html! { <div key={index} style={reveal.style(shown)}>{child}</div> }
            }) }
        </div>
    }
}
