use yew::prelude::*;

use crate::signals::use_elapsed;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl OrbSize {
    fn class(self) -> &'static str {
        match self {
            OrbSize::Sm => "orb-sm",
            OrbSize::Md => "orb-md",
            OrbSize::Lg => "orb-lg",
            OrbSize::Xl => "orb-xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientOrbProps {
    #[prop_or_default]
    pub size: OrbSize,
    /// Positioning classes, e.g. `"orb-top-left"`.
    #[prop_or_default]
    pub position: Classes,
    #[prop_or(true)]
    pub blur: bool,
}

#[function_component(GradientOrb)]
pub fn gradient_orb(props: &GradientOrbProps) -> Html {
    html! {
        <div class={classes!("gradient-orb", props.size.class(), props.position.clone(), props.blur.then_some("orb-blur"))}></div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatIntensity {
    Light,
    #[default]
    Medium,
    Strong,
}

#[derive(Properties, PartialEq)]
pub struct FloatingElementsProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub intensity: FloatIntensity,
    #[prop_or_default]
    pub class: Classes,
}

/// Hover lift; the motion itself lives in the stylesheet.
#[function_component(FloatingElements)]
pub fn floating_elements(props: &FloatingElementsProps) -> Html {
    let intensity = match props.intensity {
        FloatIntensity::Light => "float-light",
        FloatIntensity::Medium => "float-medium",
        FloatIntensity::Strong => "float-strong",
    };
    html! {
        <div class={classes!("floating", intensity, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or(AttrValue::Static("100%"))]
    pub width: AttrValue,
    #[prop_or(AttrValue::Static("2rem"))]
    pub height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div class={classes!("skeleton", props.class.clone())}
            style={format!("width: {}; height: {};", props.width, props.height)}></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyWrapperProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(300)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub fallback: Option<Html>,
}

/// Shows `fallback` (a skeleton by default) until `delay_ms` after mount.
#[function_component(LazyWrapper)]
pub fn lazy_wrapper(props: &LazyWrapperProps) -> Html {
    let loaded = use_elapsed(props.delay_ms);

    html! {
        <div class="lazy-wrapper">
            if loaded {
                { for props.children.iter() }
            } else if let Some(fallback) = &props.fallback {
                { fallback.clone() }
            } else {
                <Skeleton height="10rem" />
            }
        </div>
    }
}
