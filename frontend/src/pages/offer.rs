use yew::prelude::*;

use crate::animation::reveal::Direction;
use crate::components::decor::{LazyWrapper, Skeleton};
use crate::components::interactive::{MagneticButton, TiltCard};
use crate::components::reveal::{ScrollReveal, StaggeredReveal, TextReveal};
use crate::components::scroll_effects::MorphingBackground;
use crate::config::{ADVANCED_REVEAL_DISTANCE_PX, ADVANCED_REVEAL_DURATION_S, ADVANCED_REVEAL_MARGIN};
use crate::pages::content::{ProcessStep, Service, Testimonial, BENEFITS, PROCESS_STEPS, RESULT_STATS, SERVICES, TESTIMONIALS};
use crate::pages::hero::stat_figure;

/// Section heading that rises further and slower, starting just before it scrolls in.
#[derive(Properties, PartialEq)]
pub struct SectionIntroProps {
    pub title: AttrValue,
    pub lead: AttrValue,
}

#[function_component(SectionIntro)]
pub fn section_intro(props: &SectionIntroProps) -> Html {
    html! {
        <ScrollReveal direction={Direction::Up} delay={0.1}
            distance={ADVANCED_REVEAL_DISTANCE_PX} duration={ADVANCED_REVEAL_DURATION_S}
            root_margin={ADVANCED_REVEAL_MARGIN}>
            <div class="section-intro">
                <h2>{props.title.to_string()}</h2>
                <p>{props.lead.to_string()}</p>
            </div>
        </ScrollReveal>
    }
}

fn check_item(text: &'static str) -> Html {
    html! {
        <div key={text} class="check-item">
            <span class="check-mark">{"✓"}</span>
            <span>{text}</span>
        </div>
    }
}

fn process_card(index: usize, step: &ProcessStep) -> Html {
    let last = index + 1 == PROCESS_STEPS.len();
    html! {
        <ScrollReveal key={step.number as usize} delay={index as f64 * 0.1}>
            <div class="process-card">
                <div class="process-badge">{step.number.to_string()}</div>
                <div class="process-icon">{step.icon}</div>
                <span class="process-duration">{step.duration}</span>
                <h3>{step.title}</h3>
                <p>{step.description}</p>
                <div class="deliverables">
                    <h4>{"Key Deliverables:"}</h4>
                    { for step.deliverables.iter().copied().map(check_item) }
                </div>
                if !last {
                    <div class="process-connector"></div>
                }
            </div>
        </ScrollReveal>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="about" class="process-section">
            <div class="container">
                <ScrollReveal>
                    <div class="section-intro">
                        <h2>{"How We Deliver Results"}</h2>
                        <TextReveal class="section-lead"
                            text="Our proven 4-step process transforms your vision into a high-converting digital experience that drives real business growth." />
                    </div>
                </ScrollReveal>

                <div class="process-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| process_card(index, step)) }
                </div>

                <ScrollReveal delay={0.6}>
                    <div class="cta-section">
                        <h3>{"Why Our Process Works"}</h3>
                        <div class="process-benefits">
                            { for BENEFITS.iter().map(|benefit| html! {
                                <div key={benefit.title} class="benefit-card">
                                    <div class="benefit-icon">{benefit.icon}</div>
                                    <h4>{benefit.title}</h4>
                                    <p>{benefit.description}</p>
                                </div>
                            }) }
                        </div>
                        <MagneticButton href="#contact" class="cta-primary">
                            {"🚀 Start Your Project Today"}
                        </MagneticButton>
                        <p class="caption">{"Free consultation • No commitment required • 24-hour response guaranteed"}</p>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <TiltCard key={service.title} max_tilt={6.0} class="service-card">
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p class="value-proposition">{service.value_proposition}</p>
            <p>{service.description}</p>
            <ul class="feature-list">
                { for service.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <span class="check-mark">{"✓"}</span>
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            <MagneticButton href="#contact" class="cta-secondary">{service.cta}</MagneticButton>
        </TiltCard>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <MorphingBackground>
            <section id="services" class="services-section">
                <div class="container">
                    <SectionIntro title="Core Services That Drive Growth"
                        lead="Three essential services that transform your business and maximize your online potential." />
                    <StaggeredReveal stagger={0.2} class="services-grid">
                        { for SERVICES.iter().map(service_card) }
                    </StaggeredReveal>
                </div>
            </section>
        </MorphingBackground>
    }
}

fn stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..5u8).map(|i| html! {
                <span key={i as usize} class={if i < rating { "star filled" } else { "star" }}>{"★"}</span>
            }) }
        </div>
    }
}

fn testimonial_card(index: usize, testimonial: &Testimonial) -> Html {
    html! {
        <ScrollReveal key={testimonial.name} delay={index as f64 * 0.1}>
            <div class="testimonial-card">
                <div class="testimonial-header">
                    { stars(testimonial.rating) }
                    <span class="result-badge">{testimonial.result}</span>
                </div>
                <blockquote>{format!("“{}”", testimonial.quote)}</blockquote>
                <div class="testimonial-author">
                    <div class="avatar">{testimonial.initial()}</div>
                    <div>
                        <div class="author-name">{testimonial.name}</div>
                        <div class="author-role">{format!("{}, {}", testimonial.position, testimonial.company)}</div>
                    </div>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let fallback = html! {
        <div class="testimonials-grid">
            { for (0..TESTIMONIALS.len()).map(|i| html! { <Skeleton key={i} height="16rem" class="testimonial-skeleton" /> }) }
        </div>
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="container">
                <SectionIntro title="Real Results From Real Clients"
                    lead="See how we've helped businesses like yours grow their online presence and increase revenue." />

                <LazyWrapper delay_ms={500} fallback={fallback}>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, t)| testimonial_card(index, t)) }
                    </div>

                    <ScrollReveal>
                        <div class="results-stats">
                            { for RESULT_STATS.iter().map(|stat| html! {
                                <div key={stat.label} class="stat-card">
                                    <div class="stat-icon">{stat.icon}</div>
                                    { stat_figure(stat) }
                                    <p class="stat-label">{stat.label}</p>
                                </div>
                            }) }
                        </div>
                    </ScrollReveal>
                </LazyWrapper>
            </div>
        </section>
    }
}
