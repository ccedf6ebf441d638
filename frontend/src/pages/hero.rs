use yew::prelude::*;

use crate::animation::reveal::Direction;
use crate::components::decor::{FloatIntensity, FloatingElements, GradientOrb, OrbSize};
use crate::components::interactive::{InteractiveDots, MagneticButton, MagneticText, ParticleField, TiltCard};
use crate::components::reveal::{ScrollReveal, StaggeredReveal};
use crate::components::scroll_effects::{MorphingBackground, Parallax};
use crate::components::text::{AnimatedCounter, HighlightOnHover, ScrollCounter, TextLoop};
use crate::pages::content::{Stat, CLIENTS, HERO_PHRASES, PROBLEMS, SOCIAL_PROOF_STATS, SOLUTIONS, TRUST_POINTS};

pub fn trust_points() -> Html {
    html! {
        <div class="trust-points">
            { for TRUST_POINTS.iter().map(|point| html! {
                <span key={*point} class="trust-point">
                    <span class="check">{"✓"}</span>
                    {*point}
                </span>
            }) }
        </div>
    }
}

/// Counts up when the number is numeric, otherwise shows it as written.
pub fn stat_figure(stat: &Stat) -> Html {
    match stat.count {
        Some(end) => html! { <ScrollCounter end={end} suffix={stat.suffix} class="stat-number" /> },
        None => html! { <div class="stat-number">{stat.number}</div> },
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let phrases: Vec<AttrValue> = HERO_PHRASES.iter().copied().map(AttrValue::Static).collect();

    html! {
        <section id="home" class="hero-section">
            <div class="hero-effects desktop-only">
                <ParticleField particle_count={60} />
                <GradientOrb size={OrbSize::Xl} position="orb-top-left" />
                <GradientOrb size={OrbSize::Lg} position="orb-bottom-right" />
                <GradientOrb size={OrbSize::Md} position="orb-mid-right" />
                <InteractiveDots dot_count={80} class="dots-faint" />
            </div>
            <div class="hero-grid-background desktop-only"></div>

            <div class="container hero-content">
                <div class="hero-copy">
                    <ScrollReveal>
                        <h1 class="hero-title">
                            <span class="hero-kicker">
                                <MagneticText text="Transform Your Business Online" strength={0.2} />
                            </span>
                            <span class="hero-headline">
                                <TextLoop phrases={phrases} />
                            </span>
                        </h1>
                    </ScrollReveal>

                    <ScrollReveal delay={0.2}>
                        <p class="hero-lead">
                            {"Stop losing customers to outdated websites. We create "}
                            <span class="accent">{"high-converting digital experiences"}</span>
                            {" that turn visitors into customers and grow your revenue."}
                        </p>
                    </ScrollReveal>

                    <ScrollReveal delay={0.4}>
                        <div class="hero-actions">
                            <FloatingElements intensity={FloatIntensity::Strong}>
                                <MagneticButton href="#contact" class="cta-primary">
                                    {"🚀 Get Your Free Website Audit"}
                                </MagneticButton>
                            </FloatingElements>
                            { trust_points() }
                        </div>
                    </ScrollReveal>
                </div>

                <div class="hero-visual">
                    <ScrollReveal delay={0.5} direction={Direction::Right}>
                        <Parallax speed={0.3}>
                            <TiltCard max_tilt={8.0}>
                                <FloatingElements intensity={FloatIntensity::Medium}>
                                    <div class="hero-logo">
                                        <img src="/logo.png" alt="Website Expertz Logo" />
                                        <div class="hero-logo-glow"></div>
                                    </div>
                                    <div class="hero-badge">
                                        <AnimatedCounter value={150} suffix="+" class="hero-badge-number" />
                                        <span>{"websites launched"}</span>
                                    </div>
                                </FloatingElements>
                            </TiltCard>
                        </Parallax>
                    </ScrollReveal>
                </div>
            </div>

            <div class="scroll-cue">
                <span>{"Scroll to explore"}</span>
                <div class="scroll-cue-mouse"><div class="scroll-cue-wheel"></div></div>
                <div class="scroll-cue-arrow">{"↓"}</div>
            </div>
        </section>
    }
}

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    html! {
        <section id="social-proof" class="social-proof-section">
            <div class="container">
                <ScrollReveal>
                    <div class="section-intro">
                        <h2>{"Trusted by 150+ Growing Businesses"}</h2>
                        <p>{"Join successful companies that have transformed their online presence with our proven strategies"}</p>
                    </div>
                </ScrollReveal>

                <StaggeredReveal class="stats-grid">
                    { for SOCIAL_PROOF_STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stat-card">
                            <div class="stat-icon">{stat.icon}</div>
                            { stat_figure(stat) }
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </StaggeredReveal>

                <ScrollReveal delay={0.2}>
                    <div class="clients">
                        <p>{"Proud to work with innovative companies"}</p>
                        <div class="client-list">
                            { for CLIENTS.iter().map(|client| html! {
                                <HighlightOnHover key={*client} class="client-name">{*client}</HighlightOnHover>
                            }) }
                        </div>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

fn point_list(items: &'static [&'static str], mark: &'static str, class: &'static str) -> Html {
    html! {
        <div class="point-list">
            { for items.iter().map(|item| html! {
                <div key={*item} class={classes!("point", class)}>
                    <div class="point-mark">{mark}</div>
                    <p>{*item}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    html! {
        <MorphingBackground class="problem-solution-section">
            <div class="container narrow">
                <StaggeredReveal stagger={0.15} class="two-columns">
                    <div class="column">
                        <ScrollReveal>
                            <h2>{"Is Your Website"}<span class="accent">{" Costing You Business?"}</span></h2>
                        </ScrollReveal>
                        <ScrollReveal delay={0.1}>
                            { point_list(PROBLEMS, "✕", "problem") }
                        </ScrollReveal>
                    </div>
                    <div class="column">
                        <ScrollReveal delay={0.2}>
                            <h2>{"We Fix These Problems"}<span class="accent">{" Fast"}</span></h2>
                        </ScrollReveal>
                        <ScrollReveal delay={0.3}>
                            { point_list(SOLUTIONS, "✓", "solution") }
                        </ScrollReveal>
                        <ScrollReveal delay={0.4}>
                            <div class="column-cta">
                                <MagneticButton href="#contact" class="cta-primary">
                                    {"Get Your Free Website Audit"}
                                </MagneticButton>
                            </div>
                        </ScrollReveal>
                    </div>
                </StaggeredReveal>
            </div>
        </MorphingBackground>
    }
}
