use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::decor::GradientOrb;
use crate::components::interactive::MagneticButton;
use crate::components::reveal::{ScrollReveal, SplitTextReveal};
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, SITE_NAME};
use crate::pages::content::{FooterLink, FOOTER_COMPANY, FOOTER_SERVICES};
use crate::pages::hero::trust_points;
use crate::signals::scroll_to;

fn direct_links(class: &'static str) -> Html {
    html! {
        <>
            <a href={format!("mailto:{}", CONTACT_EMAIL)} class={class}>
                <span class="link-icon">{"📧"}</span>
                <span>{CONTACT_EMAIL}</span>
            </a>
            <a href={CONTACT_PHONE_HREF} class={class}>
                <span class="link-icon">{"📞"}</span>
                <span>{CONTACT_PHONE}</span>
            </a>
        </>
    }
}

/// Plain uncontrolled form; nothing is sent anywhere.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="container narrow">
                <ScrollReveal>
                    <div class="section-intro">
                        <h2><SplitTextReveal text="Ready to Get Started?" /></h2>
                        <p>{"Get a free consultation and see how we can transform your business online"}</p>
                    </div>
                </ScrollReveal>

                <ScrollReveal>
                    <div class="contact-card">
                        <GradientOrb position="orb-card-corner" />
                        <div class="contact-card-header">
                            <h3>{"Get Your Free Website Audit"}</h3>
                            <p>{"Tell us about your project and we'll get back to you within 24 hours"}</p>
                        </div>

                        <form class="contact-form">
                            <div class="form-row">
                                <input type="text" name="name" placeholder="Your Name" required={true} />
                                <input type="email" name="email" placeholder="Email Address" required={true} />
                            </div>
                            <input type="tel" name="phone" placeholder="Phone Number (optional)" />
                            <textarea name="message" rows="4" placeholder="Brief message about your project (optional)"></textarea>
                            <MagneticButton kind="submit" class="cta-primary form-submit">{"🚀 Get My Free Audit"}</MagneticButton>
                        </form>

                        { trust_points() }

                        <div class="direct-contact">
                            <p>{"Prefer to talk directly?"}</p>
                            <div class="direct-links">{ direct_links("direct-link") }</div>
                        </div>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

fn footer_column(title: &'static str, links: &'static [FooterLink]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|link| {
                    let section = link.section;
                    html! {
                        <li key={link.label}>
                            <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| { scroll_to(section); })}>
                                {link.label}
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="/logo.png" alt="WebsiteExpertz Logo" width="160" height="40" />
                        <p>{"Transforming businesses with cutting-edge web solutions and digital marketing strategies that drive real results."}</p>
                        <div class="social-links">
                            <a href="#" aria-label="Facebook">{"📘"}</a>
                            <a href="#" aria-label="Twitter">{"🐦"}</a>
                            <a href="#" aria-label="LinkedIn">{"💼"}</a>
                        </div>
                    </div>

                    { footer_column("Services", FOOTER_SERVICES) }
                    { footer_column("Company", FOOTER_COMPANY) }

                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <div class="footer-contact">
                            { direct_links("footer-contact-link") }
                            <div class="footer-contact-link">
                                <span class="link-icon">{"📍"}</span>
                                <span>{"India"}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© 2025 {}. All rights reserved.", SITE_NAME)}</p>
                    <div class="legal-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Cookie Policy"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
