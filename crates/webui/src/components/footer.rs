use chrono::{Datelike, Local};
use yew::prelude::*;

const SUPPORT_EMAIL: &str = "support@hackmate.com";

const QUICK_LINKS: [(&str, &str); 3] = [
    ("About", "/about"),
    ("Contact", "/contact"),
    ("Privacy Policy", "/privacy"),
];

const RESOURCE_LINKS: [(&str, &str); 2] = [("Terms", "/terms"), ("FAQ", "/faq")];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com/hackmate"),
    ("Twitter", "https://twitter.com/hackmate"),
    ("LinkedIn", "https://linkedin.com/company/hackmate"),
    ("Discord", "https://discord.gg/hackmate"),
];

fn link_list(links: &[(&'static str, &'static str)]) -> Html {
    links
        .iter()
        .map(|(name, href)| html! { <li key={*name}><a href={*href}>{ *name }</a></li> })
        .collect()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <div class="brand">
                        <span class="brand-mark">{"⚡"}</span>
                        <span class="brand-name">{"HackMate"}</span>
                    </div>
                    <p>
                        {"Find, join, and organize hackathons worldwide. Connect with fellow developers and turn your ideas into reality."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(name, url)| html! {
                            <a
                                href={*url}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={*name}
                            >
                                { *name }
                            </a>
                        })}
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>{ link_list(&QUICK_LINKS) }</ul>
                </div>

                <div>
                    <h3>{"Resources"}</h3>
                    <ul>
                        { link_list(&RESOURCE_LINKS) }
                        <li><a href={format!("mailto:{SUPPORT_EMAIL}")}>{"Support"}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {current_year} HackMate. All rights reserved.") }</p>
                <p>{"Made with 💙 for the developer community"}</p>
            </div>
        </footer>
    }
}
