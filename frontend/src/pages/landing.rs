use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::interactive::CursorFollower;
use crate::components::scroll_effects::{ScrollProgressBar, ScrollProgressCircle};
use crate::pages::contact::{Contact, Footer};
use crate::pages::header::{FloatingNavDots, Header};
use crate::pages::hero::{Hero, ProblemSolution, SocialProof};
use crate::pages::offer::{Process, Services, Testimonials};
use crate::signals::env::scroll_to_top;
use crate::signals::use_scrolled_past;

/// Back-to-top button once the hero is out of the way.
#[function_component(BackToTop)]
fn back_to_top() -> Html {
    let visible = use_scrolled_past(400.0);
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button class={classes!("back-to-top", visible.then(|| "visible"))} onclick={onclick} aria-label="Back to top">
            <ScrollProgressCircle size={52.0} stroke_width={3.0} />
        </button>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                debug!("landing mounted, resetting scroll");
                scroll_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Header />
            <ScrollProgressBar />
            <CursorFollower />

            <main>
                <Hero />
                <SocialProof />
                <ProblemSolution />
                <Process />
                <Services />
                <Testimonials />
                <Contact />
            </main>
            <Footer />

            // After the sections so their ids exist when the observer attaches.
            <FloatingNavDots />
            <BackToTop />

            <style>
                {r#"
:root {
    --header-height: 72px;
    --red-400: #f87171;
    --red-500: #ef4444;
    --red-600: #dc2626;
    --red-700: #b91c1c;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-900: #111827;
    --green-500: #22c55e;
}

html {
    scroll-padding-top: var(--header-height);
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    color: var(--gray-900);
    background: #fff;
}

body.nav-open {
    overflow: hidden;
}

.landing-page {
    position: relative;
    overflow: hidden;
    min-height: 100vh;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    position: relative;
    z-index: 1;
}

.container.narrow {
    max-width: 64rem;
}

.accent {
    color: var(--red-600);
}

.desktop-only {
    display: none;
}

@media (min-width: 768px) {
    .desktop-only {
        display: block;
    }
}

section {
    position: relative;
    padding: 5rem 0;
}

.section-intro {
    text-align: center;
    margin-bottom: 4rem;
}

.section-intro h2 {
    font-size: clamp(1.75rem, 4vw, 3rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.section-intro p,
.section-lead {
    color: var(--gray-600);
    font-size: 1.125rem;
    max-width: 48rem;
    margin: 0 auto;
    line-height: 1.7;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    height: var(--header-height);
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(8px);
    transition: box-shadow 0.3s ease, background 0.3s ease;
}

.site-header.scrolled {
    background: rgba(255, 255, 255, 0.97);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
}

.header-content {
    max-width: 80rem;
    height: 100%;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    background: none;
    border: none;
    cursor: pointer;
}

.header-logo-text {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--red-600);
}

.desktop-nav {
    display: none;
    align-items: center;
    gap: 2rem;
}

.nav-links {
    list-style: none;
    display: flex;
    gap: 1.5rem;
    margin: 0;
    padding: 0;
}

.nav-link,
.mobile-nav-link,
.footer-link {
    background: none;
    border: none;
    cursor: pointer;
    font: inherit;
    color: var(--gray-700);
    transition: color 0.2s ease;
}

.nav-link:hover,
.mobile-nav-link:hover,
.footer-link:hover {
    color: var(--red-600);
}

.nav-cta {
    background: linear-gradient(90deg, var(--red-500), var(--red-600));
    color: #fff;
    border: none;
    border-radius: 0.75rem;
    padding: 0.6rem 1.4rem;
    font-weight: 600;
    cursor: pointer;
}

.nav-toggle {
    display: flex;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.nav-toggle-line {
    width: 24px;
    height: 2px;
    background: var(--gray-900);
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.nav-toggle.open .nav-toggle-line:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.nav-toggle.open .nav-toggle-line:nth-child(2) {
    opacity: 0;
}

.nav-toggle.open .nav-toggle-line:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

@media (min-width: 1024px) {
    .desktop-nav {
        display: flex;
    }

    .nav-toggle,
    .mobile-menu,
    .mobile-menu-overlay {
        display: none;
    }
}

.mobile-menu {
    position: fixed;
    top: var(--header-height);
    right: 0;
    width: min(20rem, 85vw);
    bottom: 0;
    z-index: 49;
    background: #fff;
    transform: translateX(100%);
    transition: transform 0.3s ease;
    box-shadow: -8px 0 24px rgba(0, 0, 0, 0.1);
}

.mobile-menu.open {
    transform: translateX(0);
}

.mobile-menu .nav-links {
    flex-direction: column;
    padding: 1.5rem;
}

.mobile-nav-link {
    display: flex;
    align-items: center;
    gap: 1rem;
    width: 100%;
    padding: 0.75rem 1rem;
    font-size: 1.125rem;
}

.mobile-menu-cta {
    margin-top: 1rem;
}

.mobile-menu-overlay {
    position: fixed;
    inset: 0;
    z-index: 48;
    background: rgba(0, 0, 0, 0.4);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.mobile-menu-overlay.open {
    opacity: 1;
    pointer-events: auto;
}

/* Floating section dots */
.floating-nav-dots {
    position: fixed;
    right: 1.5rem;
    top: 50%;
    transform: translateY(-50%);
    z-index: 40;
    display: none;
    flex-direction: column;
    gap: 0.75rem;
}

@media (min-width: 1024px) {
    .floating-nav-dots {
        display: flex;
    }
}

.nav-dot {
    position: relative;
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: 2px solid var(--red-400);
    background: transparent;
    cursor: pointer;
    padding: 0;
    transition: transform 0.3s ease, background 0.3s ease;
}

.nav-dot.active {
    background: var(--red-500);
    transform: scale(1.3);
}

.nav-dot-label {
    position: absolute;
    right: 1.5rem;
    top: 50%;
    transform: translateY(-50%);
    white-space: nowrap;
    font-size: 0.75rem;
    opacity: 0;
    transition: opacity 0.2s ease;
}

.nav-dot:hover .nav-dot-label {
    opacity: 1;
}

/* Scroll progress */
.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 3px;
    z-index: 60;
}

.scroll-progress-fill {
    height: 100%;
    background: linear-gradient(90deg, var(--red-500), var(--red-700));
    transition: width 0.1s linear;
}

.progress-ring {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    color: var(--red-500);
}

.progress-ring-svg {
    transform: rotate(-90deg);
}

.progress-ring-track {
    opacity: 0.2;
}

.progress-ring-value {
    transition: stroke-dashoffset 0.1s linear;
}

.progress-ring-label {
    position: absolute;
    font-size: 0.7rem;
    font-weight: 600;
}

.back-to-top {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 40;
    background: #fff;
    border: none;
    border-radius: 50%;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.12);
    cursor: pointer;
    padding: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.back-to-top.visible {
    opacity: 1;
    pointer-events: auto;
}

/* Reveal */
.reveal {
    will-change: transform, opacity;
}

.split-text {
    display: inline-block;
    overflow: hidden;
}

.split-char {
    display: inline-block;
    transition: transform 0.5s ease, opacity 0.5s ease;
}

.text-loop {
    display: inline-block;
}

.text-loop-phrase {
    display: inline-block;
    background: linear-gradient(90deg, var(--red-600), #991b1b);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    animation: text-loop-in 0.5s ease;
}

@keyframes text-loop-in {
    from { opacity: 0; transform: translateY(40%); }
    to { opacity: 1; transform: translateY(0); }
}

.highlight-hover {
    position: relative;
    display: inline-block;
    padding: 0.25rem 0.75rem;
}

.highlight-hover-bg {
    position: absolute;
    inset: 0;
    border-radius: 0.5rem;
    background: rgba(239, 68, 68, 0.1);
    transition: opacity 0.3s ease;
}

.highlight-hover-content {
    position: relative;
}

/* Pointer effects */
.tilt-card {
    transform-style: preserve-3d;
    transition: transform 0.2s ease-out;
}

.magnetic-text {
    display: inline-block;
}

.magnetic-letter {
    display: inline-block;
    transition: transform 0.2s ease-out;
}

.magnetic-button {
    position: relative;
    overflow: hidden;
    border: none;
    cursor: pointer;
    transition: transform 0.2s ease-out, box-shadow 0.3s ease;
}

.magnetic-button[disabled] {
    cursor: not-allowed;
    opacity: 0.6;
}

.magnetic-button-label {
    position: relative;
    z-index: 1;
}

.magnetic-button-sheen {
    position: absolute;
    inset: 0;
    background: linear-gradient(120deg, transparent 30%, rgba(255, 255, 255, 0.25) 50%, transparent 70%);
    transform: translateX(-100%);
    transition: transform 0.6s ease;
}

.magnetic-button:hover .magnetic-button-sheen {
    transform: translateX(100%);
}

.cta-primary {
    background: linear-gradient(90deg, var(--red-500), var(--red-600));
    color: #fff;
    font-size: 1.125rem;
    font-weight: 600;
    padding: 1.1rem 2.75rem;
    border-radius: 0.75rem;
    box-shadow: 0 10px 25px rgba(220, 38, 38, 0.25);
    min-height: 56px;
}

.cta-secondary {
    width: 100%;
    background: var(--gray-900);
    color: #fff;
    font-weight: 600;
    padding: 0.9rem 1.5rem;
    border-radius: 0.75rem;
    margin-top: auto;
}

.interactive-dots,
.particle-field {
    position: absolute;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
}

.dots-faint {
    opacity: 0.3;
}

.interactive-dot {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--red-500);
    transition: opacity 0.2s ease, transform 0.2s ease;
}

.particle {
    position: absolute;
    border-radius: 50%;
    background: rgba(239, 68, 68, 0.35);
    animation-name: particle-float;
    animation-timing-function: ease-in-out;
    animation-iteration-count: infinite;
    transition: left 0.3s ease-out, top 0.3s ease-out;
}

@keyframes particle-float {
    0%, 100% { transform: translateY(0); opacity: 0.4; }
    50% { transform: translateY(-20px); opacity: 1; }
}

.cursor-follower {
    position: fixed;
    z-index: 70;
    pointer-events: none;
    border: 2px solid var(--red-500);
    border-radius: 50%;
    transition: opacity 0.2s ease, left 0.08s linear, top 0.08s linear;
    display: none;
}

@media (pointer: fine) {
    .cursor-follower {
        display: block;
    }
}

.cursor-follower-dot {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 4px;
    height: 4px;
    margin: -2px 0 0 -2px;
    border-radius: 50%;
    background: var(--red-500);
}

/* Decor */
.gradient-orb {
    position: absolute;
    border-radius: 50%;
    background: radial-gradient(circle, rgba(244, 114, 182, 0.35), rgba(239, 68, 68, 0.15) 60%, transparent 70%);
    pointer-events: none;
    animation: orb-drift 12s ease-in-out infinite;
}

.orb-blur { filter: blur(40px); }
.orb-sm { width: 8rem; height: 8rem; }
.orb-md { width: 12rem; height: 12rem; }
.orb-lg { width: 18rem; height: 18rem; }
.orb-xl { width: 24rem; height: 24rem; }
.orb-top-left { top: 2.5rem; left: -5rem; }
.orb-bottom-right { bottom: 5rem; right: -4rem; }
.orb-mid-right { top: 33%; right: 2.5rem; }
.orb-card-corner { top: -4rem; right: -4rem; opacity: 0.5; }

@keyframes orb-drift {
    0%, 100% { transform: translate(0, 0) scale(1); }
    50% { transform: translate(20px, -30px) scale(1.05); }
}

.floating {
    transition: transform 0.3s ease;
}

.float-light:hover { transform: translateY(-4px); }
.float-medium:hover { transform: translateY(-8px); }
.float-strong:hover { transform: translateY(-12px) scale(1.02); }

.skeleton {
    border-radius: 1rem;
    background: linear-gradient(90deg, var(--gray-100) 25%, var(--gray-200) 50%, var(--gray-100) 75%);
    background-size: 200% 100%;
    animation: skeleton-shimmer 1.5s ease-in-out infinite;
}

@keyframes skeleton-shimmer {
    from { background-position: 200% 0; }
    to { background-position: -200% 0; }
}

.morphing-background {
    transition: background 0.3s ease;
}

/* Hero */
.hero-section {
    min-height: calc(100vh - var(--header-height));
    padding: 2rem 0 3rem;
    display: flex;
    align-items: center;
    background:
        radial-gradient(ellipse at top, rgba(239, 68, 68, 0.1) 0%, transparent 50%),
        radial-gradient(ellipse at bottom, rgba(220, 38, 38, 0.08) 0%, transparent 50%),
        linear-gradient(135deg, #ffffff 0%, #f9fafb 25%, #ffffff 50%, #f3f4f6 75%, #ffffff 100%);
}

.hero-effects {
    position: absolute;
    inset: 0;
}

.hero-grid-background {
    position: absolute;
    inset: 0;
    opacity: 0.15;
    background-image:
        linear-gradient(rgba(239, 68, 68, 0.1) 1px, transparent 1px),
        linear-gradient(90deg, rgba(239, 68, 68, 0.1) 1px, transparent 1px);
    background-size: 60px 60px;
    animation: move-grid 25s linear infinite;
}

@keyframes move-grid {
    from { background-position: 0 0; }
    to { background-position: 60px 60px; }
}

.hero-content {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
    width: 100%;
}

@media (min-width: 1024px) {
    .hero-content {
        grid-template-columns: 1fr 1fr;
    }
}

.hero-title {
    margin: 0 0 1.5rem;
}

.hero-kicker {
    display: block;
    font-size: 1.5rem;
    font-weight: 500;
    color: var(--gray-600);
    margin-bottom: 1rem;
}

.hero-headline {
    display: block;
    font-size: clamp(2.5rem, 7vw, 4.5rem);
    font-weight: 800;
    line-height: 1.1;
}

.hero-lead {
    font-size: 1.25rem;
    color: var(--gray-700);
    line-height: 1.7;
    max-width: 40rem;
}

.hero-actions {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 1rem;
    padding-top: 1.5rem;
}

.trust-points {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    color: var(--gray-600);
}

.trust-point .check,
.check-mark {
    color: var(--green-500);
    margin-right: 0.35rem;
    font-weight: 700;
}

.hero-visual {
    display: flex;
    justify-content: center;
}

.hero-logo {
    position: relative;
    width: min(24rem, 70vw);
    aspect-ratio: 1;
}

.hero-logo img {
    width: 100%;
    height: 100%;
    object-fit: contain;
    filter: drop-shadow(0 20px 40px rgba(220, 38, 38, 0.3));
}

.hero-logo-glow {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    background: radial-gradient(circle, rgba(220, 38, 38, 0.2) 0%, transparent 70%);
    animation: gentle-pulse 3s ease-in-out infinite;
}

@keyframes gentle-pulse {
    0%, 100% { opacity: 0.6; transform: scale(1); }
    50% { opacity: 1; transform: scale(1.05); }
}

.hero-badge {
    display: inline-flex;
    align-items: baseline;
    gap: 0.5rem;
    margin-top: 1rem;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: #fff;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
    color: var(--gray-600);
}

.hero-badge-number {
    font-weight: 700;
    color: var(--red-600);
    font-size: 1.25rem;
}

.scroll-cue {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    color: var(--gray-700);
    font-size: 0.875rem;
    animation: bounce 2s infinite;
}

.scroll-cue-mouse {
    width: 24px;
    height: 40px;
    border: 2px solid var(--red-400);
    border-radius: 999px;
    display: flex;
    justify-content: center;
}

.scroll-cue-wheel {
    width: 4px;
    height: 10px;
    margin-top: 6px;
    border-radius: 2px;
    background: var(--red-400);
    animation: float-up 2s ease-in-out infinite;
}

.scroll-cue-arrow {
    color: var(--red-400);
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, -8px); }
}

@keyframes float-up {
    0% { transform: translateY(0); opacity: 1; }
    100% { transform: translateY(12px); opacity: 0; }
}

/* Social proof and stats */
.social-proof-section {
    background: linear-gradient(180deg, var(--gray-50), #fff);
}

.stats-grid,
.results-stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
    margin-bottom: 4rem;
}

@media (min-width: 1024px) {
    .stats-grid,
    .results-stats {
        grid-template-columns: repeat(4, 1fr);
    }
}

.stat-card {
    text-align: center;
    background: #fff;
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}

.stat-icon {
    font-size: 2rem;
    margin-bottom: 0.5rem;
}

.stat-number {
    font-size: 2rem;
    font-weight: 700;
    color: var(--red-600);
}

.stat-label {
    color: var(--gray-600);
    font-weight: 500;
}

.clients {
    text-align: center;
    color: var(--gray-600);
}

.client-list {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
    opacity: 0.7;
    font-weight: 600;
}

/* Problem / solution */
.problem-solution-section {
    padding: 5rem 0;
}

.two-columns {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
}

@media (min-width: 1024px) {
    .two-columns {
        grid-template-columns: 1fr 1fr;
    }
}

.point-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.point {
    display: flex;
    gap: 1rem;
    align-items: flex-start;
    padding: 1rem;
    border-radius: 0.75rem;
    background: #fff;
}

.point-mark {
    flex-shrink: 0;
    width: 1.75rem;
    height: 1.75rem;
    border-radius: 50%;
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}

.point.problem .point-mark { background: var(--red-500); }
.point.solution .point-mark { background: var(--green-500); }

.column-cta {
    padding-top: 1.5rem;
}

/* Process */
.process-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .process-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1280px) {
    .process-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

.process-card {
    position: relative;
    height: 100%;
    display: flex;
    flex-direction: column;
    background: #fff;
    border: 1px solid var(--gray-100);
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
}

.process-badge {
    position: absolute;
    top: -0.75rem;
    left: -0.75rem;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background: var(--red-500);
    color: #fff;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}

.process-icon {
    font-size: 2.5rem;
}

.process-duration {
    align-self: flex-start;
    background: rgba(239, 68, 68, 0.1);
    color: var(--red-600);
    border-radius: 999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.8rem;
    font-weight: 600;
}

.deliverables {
    margin-top: auto;
}

.check-item {
    display: flex;
    gap: 0.5rem;
    color: var(--gray-600);
    margin-bottom: 0.4rem;
}

.process-connector {
    display: none;
}

@media (min-width: 1280px) {
    .process-connector {
        display: block;
        position: absolute;
        top: 50%;
        right: -1.5rem;
        width: 1.5rem;
        height: 2px;
        background: rgba(239, 68, 68, 0.3);
    }
}

.cta-section {
    margin-top: 4rem;
    text-align: center;
}

.process-benefits {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin: 2rem 0;
}

@media (min-width: 768px) {
    .process-benefits {
        grid-template-columns: repeat(3, 1fr);
    }
}

.benefit-card {
    background: #fff;
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}

.benefit-icon {
    font-size: 2rem;
}

.caption {
    color: var(--gray-600);
    font-size: 0.875rem;
    margin-top: 1rem;
}

/* Services */
.services-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .services-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .services-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

.service-card {
    height: 100%;
    display: flex;
    flex-direction: column;
    background: #fff;
    border-radius: 1.25rem;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
}

.service-icon {
    font-size: 3rem;
}

.value-proposition {
    color: var(--red-600);
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-size: 0.875rem;
}

.feature-list {
    list-style: none;
    padding: 0;
    margin: 0 0 2rem;
}

.feature-list li {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 0.6rem;
}

/* Testimonials */
.testimonials-section {
    background: var(--gray-50);
}

.testimonials-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    margin-bottom: 4rem;
}

@media (min-width: 1024px) {
    .testimonials-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

.testimonial-card {
    height: 100%;
    display: flex;
    flex-direction: column;
    background: #fff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
}

.testimonial-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
}

.star { color: var(--gray-200); }
.star.filled { color: #facc15; }

.result-badge {
    background: #dcfce7;
    color: #166534;
    border-radius: 999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.8rem;
    font-weight: 600;
}

.testimonial-card blockquote {
    flex-grow: 1;
    margin: 0 0 2rem;
    font-style: italic;
    color: var(--gray-700);
    line-height: 1.7;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--red-500), var(--red-700));
    color: #fff;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}

.author-name { font-weight: 700; }
.author-role { color: var(--gray-600); font-size: 0.875rem; }

/* Contact */
.contact-card {
    position: relative;
    overflow: hidden;
    background: #fff;
    border-radius: 1.5rem;
    padding: 2.5rem;
    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.08);
}

.contact-card-header {
    text-align: center;
    margin-bottom: 2rem;
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

@media (min-width: 640px) {
    .form-row {
        grid-template-columns: 1fr 1fr;
    }
}

.contact-form input,
.contact-form textarea {
    font: inherit;
    padding: 0.9rem 1rem;
    border: 1px solid var(--gray-200);
    border-radius: 0.75rem;
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.contact-form input:focus,
.contact-form textarea:focus {
    outline: none;
    border-color: var(--red-400);
    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.15);
}

.contact-card .trust-points {
    justify-content: center;
    margin: 1.5rem 0;
}

.direct-contact {
    text-align: center;
    border-top: 1px solid var(--gray-100);
    padding-top: 1.5rem;
    color: var(--gray-600);
}

.direct-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}

.direct-link,
.footer-contact-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--gray-700);
    text-decoration: none;
}

.direct-link:hover,
.footer-contact-link:hover {
    color: var(--red-600);
}

/* Footer */
.site-footer {
    background: var(--gray-200);
    padding: 4rem 0 2rem;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2.5rem;
}

@media (min-width: 768px) {
    .footer-grid {
        grid-template-columns: 2fr 1fr 1fr 1.5fr;
    }
}

.footer-brand p {
    color: var(--gray-700);
    max-width: 24rem;
}

.social-links {
    display: flex;
    gap: 1rem;
    font-size: 1.25rem;
}

.social-links a {
    text-decoration: none;
}

.footer-column ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer-column li {
    margin-bottom: 0.6rem;
}

.footer-contact {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.footer-bottom {
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid #9ca3af;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1rem;
    font-size: 0.875rem;
    color: var(--gray-600);
}

.legal-links {
    display: flex;
    gap: 1.5rem;
}

.legal-links a {
    color: var(--gray-600);
    text-decoration: none;
}

@media (prefers-reduced-motion: reduce) {
    *,
    *::before,
    *::after {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
    }
}
                "#}
            </style>
        </div>
    }
}
