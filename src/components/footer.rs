use chrono::{Datelike, Utc};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::{ADDRESS_LINES, CONTACT_EMAIL, CONTACT_PHONE};

#[styled_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    let (phone_href, phone_label) = CONTACT_PHONE;

    let footer_css = css!(
        r#"
        background: var(--ll-dark);
        color: rgba(249, 243, 235, 0.7);
        padding: 4rem 1.5rem;

        .footer-inner {
            max-width: 56rem;
            margin: 0 auto;
        }
        .tagline {
            text-align: center;
            margin-bottom: 4rem;
        }
        .tagline .brand {
            font-size: 2.5rem;
            font-weight: 700;
            color: var(--ll-gold);
            margin-bottom: 1rem;
        }
        .tagline .motto {
            font-size: 1.5rem;
            font-style: italic;
            color: rgba(249, 243, 235, 0.9);
        }
        .columns {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
            margin-bottom: 3rem;
        }
        .columns a {
            color: rgba(249, 243, 235, 0.8);
            text-decoration: none;
        }
        .columns i {
            color: var(--ll-gold);
            margin-right: 0.75rem;
        }
        .socials a {
            margin-right: 1rem;
        }
        .legal {
            padding-top: 2rem;
            border-top: 1px solid rgba(249, 243, 235, 0.2);
            font-size: 0.875rem;
            color: rgba(249, 243, 235, 0.6);
            text-align: center;
        }
        @media (max-width: 768px) {
            .columns {
                grid-template-columns: 1fr;
            }
        }
        "#
    );

    html! {
        <footer class={footer_css}>
            <div class="footer-inner">
                <FadeIn class="tagline">
                    <p class="brand">{"Limelight by Payleaf"}</p>
                    <p class="motto">{"— Where Ambition Meets Experience."}</p>
                </FadeIn>
                <div class="columns">
                    <div>
                        <p>
                            <i class="fa-solid fa-location-dot"></i>
                            { ADDRESS_LINES[0] }<br />{ ADDRESS_LINES[1] }
                        </p>
                    </div>
                    <div>
                        <p>
                            <i class="fa-solid fa-phone"></i>
                            <a href={format!("tel:{}", phone_href)}>{ phone_label }</a>
                        </p>
                        <p>
                            <i class="fa-solid fa-envelope"></i>
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                        </p>
                    </div>
                    <div class="socials">
                        <p>{"Connect With Us"}</p>
                        <a href="#" aria-label="LinkedIn"><i class="fa-brands fa-linkedin"></i></a>
                        <a href="#" aria-label="Instagram"><i class="fa-brands fa-instagram"></i></a>
                    </div>
                </div>
                <div class="legal">
                    <p>{ format!("© {} Limelight by Payleaf. All Rights Reserved.", year) }</p>
                </div>
            </div>
        </footer>
    }
}
