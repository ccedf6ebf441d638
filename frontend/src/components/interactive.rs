use log::debug;
use web_sys::js_sys::Date;
use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;

use crate::animation::particles::ParticleLayout;
use crate::animation::pointer::{dot_response, magnetic_button_offset, magnetic_offsets, repulsion, tilt, Tilt};
use crate::animation::reveal::glyph;
use crate::animation::Point;
use crate::config::{PARTICLE_MAX_PUSH_PX, POINTER_FALLOFF_PX};
use crate::signals::env::{section_anchor, window};
use crate::signals::{event_point, node_rect, scroll_to, use_pointer};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(20.0)]
    pub max_tilt: f64,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let pose = use_state_eq(|| Tilt::NEUTRAL);

    let onmousemove = {
        let node = node.clone();
        let pose = pose.clone();
        let max_tilt = props.max_tilt;
        Callback::from(move |e: MouseEvent| {
            if let Some(rect) = node_rect(&node) {
                pose.set(tilt(event_point(&e), rect, max_tilt));
            }
        })
    };
    let onmouseleave = {
        let pose = pose.clone();
        Callback::from(move |_: MouseEvent| pose.set(Tilt::NEUTRAL))
    };

    html! {
        <div ref={node} class={classes!("tilt-card", props.class.clone())} style={pose.style()}
            onmousemove={onmousemove} onmouseleave={onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.3)]
    pub strength: f64,
}

/// Letters lean towards a nearby pointer and settle back when it leaves.
#[function_component(MagneticText)]
pub fn magnetic_text(props: &MagneticTextProps) -> Html {
    let node = use_node_ref();
    let offsets = use_state_eq(Vec::<Point>::new);
    let count = props.text.chars().count();

    let onmousemove = {
        let node = node.clone();
        let offsets = offsets.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if let Some(rect) = node_rect(&node) {
                offsets.set(magnetic_offsets(event_point(&e), rect, count, strength, POINTER_FALLOFF_PX));
            }
        })
    };
    let onmouseleave = {
        let offsets = offsets.clone();
        Callback::from(move |_: MouseEvent| offsets.set(Vec::new()))
    };

    html! {
        <div ref={node} class={classes!("magnetic-text", props.class.clone())} onmousemove={onmousemove} onmouseleave={onmouseleave}>
            { for props.text.chars().enumerate().map(|(i, ch)| {
                let offset = offsets.get(i).copied().unwrap_or(Point::ORIGIN);
                html! {
                    <span key={i} class="magnetic-letter"
                        style={format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y)}>
                        {glyph(ch)}
                    </span>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.3)]
    pub strength: f64,
    /// `#section` scrolls within the page, anything else opens in `target`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::Static("_self"))]
    pub target: AttrValue,
    /// `type` attribute; `"submit"` inside forms.
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state_eq(|| Point::ORIGIN);
    let pressed = use_state_eq(|| false);
    let disabled = props.disabled;

    let onpointermove = {
        let node = node.clone();
        let offset = offset.clone();
        let strength = props.strength;
        Callback::from(move |e: PointerEvent| {
            if disabled {
                return;
            }
            if let Some(rect) = node_rect(&node) {
                offset.set(magnetic_button_offset(event_point(&e), rect, strength));
            }
        })
    };
    let onpointerleave = {
        let offset = offset.clone();
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| {
            offset.set(Point::ORIGIN);
            pressed.set(false);
        })
    };
    let onpointerdown = {
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| pressed.set(!disabled))
    };
    let onpointerup = {
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| pressed.set(false))
    };
    let onclick = {
        let href = props.href.clone();
        let target = props.target.clone();
        let user_onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if disabled {
                e.prevent_default();
                return;
            }
            if let Some(href) = href.as_deref() {
                e.prevent_default();
                match section_anchor(href) {
                    Some(id) => {
                        scroll_to(id);
                    }
                    None => {
                        if let Ok(window) = window() {
                            if let Err(err) = window.open_with_url_and_target(href, &target) {
                                debug!("could not open {}: {:?}", href, err);
                            }
                        }
                    }
                }
            }
            if let Some(callback) = &user_onclick {
                callback.emit(e);
            }
        })
    };

    let style = format!(
        "transform: translate3d({:.2}px, {:.2}px, 0) scale({});",
        offset.x,
        offset.y,
        if *pressed { 0.97 } else { 1.0 }
    );

    html! {
        <button ref={node} type={props.kind.clone()} class={classes!("magnetic-button", props.class.clone())} style={style}
            onpointermove={onpointermove} onpointerleave={onpointerleave} onpointerdown={onpointerdown} onpointerup={onpointerup} onclick={onclick}
            disabled={disabled} aria-disabled={disabled.to_string()} data-cursor="hover">
            <span class="magnetic-button-label">{ for props.children.iter() }</span>
            <span aria-hidden="true" class="magnetic-button-sheen"></span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct InteractiveDotsProps {
    #[prop_or(100)]
    pub dot_count: usize,
    #[prop_or_default]
    pub class: Classes,
}

/// 10-column dot grid that lights up around the pointer.
///
/// Listens on the page-wide pointer hub, so it works under `pointer-events: none`.
#[function_component(InteractiveDots)]
pub fn interactive_dots(props: &InteractiveDotsProps) -> Html {
    let node = use_node_ref();
    let pointer = use_pointer();
    let rect = node_rect(&node);

    html! {
        <div ref={node} class={classes!("interactive-dots", props.class.clone())}>
            { for (0..props.dot_count).map(|i| {
                let x_pct = (i % 10) as f64 * 10.0 + 5.0;
                let y_pct = (i / 10) as f64 * 10.0 + 5.0;
                let distance = match (rect, pointer.present) {
                    (Some(rect), true) => {
                        let dot = Point::new(x_pct / 100.0 * rect.width, y_pct / 100.0 * rect.height);
                        dot.distance_to(rect.local(pointer.position))
                    }
                    _ => f64::INFINITY,
                };
                let (opacity, scale) = dot_response(distance, POINTER_FALLOFF_PX);
                html! {
                    <div key={i} class="interactive-dot" style={format!(
                        "left: {}%; top: {}%; opacity: {:.3}; transform: scale({:.3});",
                        x_pct, y_pct, opacity, scale
                    )}></div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(50)]
    pub particle_count: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub interactive: bool,
    /// Fixed seed for a reproducible layout; otherwise seeded from the clock.
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Floating particles, laid out once per mount, pushed aside by the pointer.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let node = use_node_ref();
    let count = props.particle_count;
    let seed = props.seed;
    let layout = use_state(move || ParticleLayout::generate(count, seed.unwrap_or_else(|| Date::now() as u64)));
    let pointer = use_pointer();
    let rect = node_rect(&node).filter(|_| props.interactive && pointer.present);

    html! {
        <div ref={node} class={classes!("particle-field", props.class.clone())}>
            { for layout.particles.iter().enumerate().map(|(i, particle)| {
                let push = match rect {
                    Some(rect) => repulsion(
                        rect.local(pointer.position),
                        particle.position_in(rect.width, rect.height),
                        POINTER_FALLOFF_PX,
                        PARTICLE_MAX_PUSH_PX,
                    ),
                    None => Point::ORIGIN,
                };
                html! {
                    <div key={i} class="particle" style={format!(
                        "left: calc({:.3}% + {:.2}px); top: calc({:.3}% + {:.2}px); width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        particle.x_pct, push.x, particle.y_pct, push.y,
                        particle.size_px, particle.size_px, particle.delay_s, particle.duration_s
                    )}></div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorFollowerProps {
    #[prop_or(20.0)]
    pub size: f64,
}

#[function_component(CursorFollower)]
pub fn cursor_follower(props: &CursorFollowerProps) -> Html {
    let pointer = use_pointer();
    let half = props.size / 2.0;
    let style = format!(
        "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px; opacity: {};",
        pointer.position.x - half,
        pointer.position.y - half,
        props.size,
        props.size,
        if pointer.present { 1 } else { 0 }
    );

    html! {
        <div class="cursor-follower" style={style}>
            <div class="cursor-follower-dot"></div>
        </div>
    }
}
