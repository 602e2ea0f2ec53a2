use yew::prelude::*;

use crate::config;
use crate::contact::form::ContactForm;
use crate::content::NAV_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = config::get_contact_email();
    let phone = config::get_contact_phone();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div class="footer-contact">
                    <h2>{"Get In Touch"}</h2>
                    <p class="footer-lead">
                        {"Ready to transform your business with AI? Tell us about your project and let's create something amazing together."}
                    </p>
                    <ContactForm />
                </div>

                <div class="footer-info">
                    <img src="/images/logo.png" width="100" alt="X-Web Labs Logo" />
                    <p>
                        {"Transforming businesses through AI automation and intelligent solutions. Your partner in digital innovation."}
                    </p>
                    <div class="footer-contact-details">
                        <a href={format!("mailto:{}", email)}>{ email }</a>
                        <a href={format!("tel:{}", phone)}>{ phone }</a>
                    </div>
                    <div class="footer-links">
                        <div>
                            <h4>{"Services"}</h4>
                            <ul>
                                <li><a href="#services">{"AI Agents"}</a></li>
                                <li><a href="#services">{"AI Websites"}</a></li>
                                <li><a href="#services">{"SEO Services"}</a></li>
                                <li><a href="#services">{"Automation Systems"}</a></li>
                            </ul>
                        </div>
                        <div>
                            <h4>{"Company"}</h4>
                            <ul>
                                { for NAV_LINKS.iter().skip(2).map(|(id, label)| html! {
                                    <li><a href={format!("#{}", id)}>{ *label }</a></li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© X-Web Labs. All rights reserved."}</p>
            </div>
        </footer>
    }
}
