use yew::prelude::*;

use crate::animation::progress::{
    element_progress, morph_style, parallax_offset, parallax_style, ring_dash_offset, ring_geometry,
    ParallaxDirection,
};
use crate::signals::{node_rect, use_scroll};

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: ParallaxDirection,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let scroll = use_scroll();
    let offset = parallax_offset(scroll.scroll_y, props.speed, props.direction);

    html! {
        <div class={classes!("parallax", props.class.clone())} style={parallax_style(offset)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressBarProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Thin bar pinned to the top of the viewport.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar(props: &ScrollProgressBarProps) -> Html {
    let progress = use_scroll().progress();

    html! {
        <div class={classes!("scroll-progress", props.class.clone())}>
            <div class="scroll-progress-fill" style={format!("width: {:.2}%;", progress)}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressCircleProps {
    #[prop_or(60.0)]
    pub size: f64,
    #[prop_or(4.0)]
    pub stroke_width: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrollProgressCircle)]
pub fn scroll_progress_circle(props: &ScrollProgressCircleProps) -> Html {
    let progress = use_scroll().progress();
    let (radius, circumference) = ring_geometry(props.size, props.stroke_width);
    let center = (props.size / 2.0).to_string();
    let size = props.size.to_string();
    let stroke = props.stroke_width.to_string();

    html! {
        <div class={classes!("progress-ring", props.class.clone())}>
            <svg width={size.clone()} height={size} class="progress-ring-svg">
                <circle cx={center.clone()} cy={center.clone()} r={radius.to_string()}
                    stroke="currentColor" stroke-width={stroke.clone()} fill="transparent"
                    class="progress-ring-track" />
                <circle cx={center.clone()} cy={center} r={radius.to_string()}
                    stroke="currentColor" stroke-width={stroke} fill="transparent"
                    stroke-dasharray={circumference.to_string()}
                    stroke-dashoffset={ring_dash_offset(progress, circumference).to_string()}
                    class="progress-ring-value" />
            </svg>
            <span class="progress-ring-label">{format!("{}%", progress.round())}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MorphingBackgroundProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Gradient backdrop that shifts as the wrapped section scrolls through view.
#[function_component(MorphingBackground)]
pub fn morphing_background(props: &MorphingBackgroundProps) -> Html {
    let node = use_node_ref();
    let scroll = use_scroll();
    // Rect comes from the previous render; zero before the first mount.
    let progress = node_rect(&node)
        .map(|rect| element_progress(rect.top, rect.height, scroll.viewport_height))
        .unwrap_or(0.0);

    html! {
        <div ref={node} class={classes!("morphing-background", props.class.clone())} style={morph_style(progress)}>
            { for props.children.iter() }
        </div>
    }
}
