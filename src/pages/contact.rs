//! Contact page markup: header controls, the contact form and the
//! back-to-top button.

use leptos::prelude::*;

use crate::config::DEFAULT_MAX_LENGTH;
use crate::state::contact::{DEFAULT_SUBJECT_PLACEHOLDER, InquiryType, counter_text};
use crate::view::{Field, PREFERRED_GROUP, ids};

#[component]
pub fn ContactPage() -> impl IntoView {
    let max_length = DEFAULT_MAX_LENGTH.to_string();

    view! {
        <header class="site-header">
            <h1>"Contact us"</h1>
            <button
                id=ids::THEME_TOGGLE
                class="theme-toggle"
                type="button"
                aria-label="Toggle color theme"
            >
                <i class="fas fa-moon" aria-hidden="true"></i>
            </button>
        </header>

        <main class="contact-page">
            <form id=ids::FORM class="contact-form" novalidate=true>
                <div class="form-row">
                    <label for=Field::Name.id()>"Name"</label>
                    <input
                        id=Field::Name.id()
                        name=Field::Name.id()
                        type="text"
                        autocomplete="name"
                        required=true
                    />
                </div>
                <div class="form-row">
                    <label for=Field::Email.id()>"Email"</label>
                    <input
                        id=Field::Email.id()
                        name=Field::Email.id()
                        type="email"
                        autocomplete="email"
                        required=true
                    />
                </div>
                <div class="form-row">
                    <label for=Field::Phone.id()>"Phone"</label>
                    <input
                        id=Field::Phone.id()
                        name=Field::Phone.id()
                        type="tel"
                        autocomplete="tel"
                    />
                </div>

                <fieldset class="form-row">
                    <legend>"Preferred contact method"</legend>
                    <label>
                        <input type="radio" name=PREFERRED_GROUP value="email" checked=true/>
                        " Email"
                    </label>
                    <label>
                        <input type="radio" name=PREFERRED_GROUP value="phone"/>
                        " Phone"
                    </label>
                </fieldset>

                <div class="form-row">
                    <label for=Field::Inquiry.id()>"Inquiry type"</label>
                    <select id=Field::Inquiry.id() name=Field::Inquiry.id()>
                        <option value="">"Select one"</option>
                        {InquiryType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-row">
                    <label for=Field::Subject.id()>"Subject"</label>
                    <input
                        id=Field::Subject.id()
                        name=Field::Subject.id()
                        type="text"
                        placeholder=DEFAULT_SUBJECT_PLACEHOLDER
                    />
                </div>
                <div class="form-row">
                    <label for=Field::Message.id()>"Message"</label>
                    <textarea
                        id=Field::Message.id()
                        name=Field::Message.id()
                        rows="6"
                        maxlength=max_length
                        required=true
                    ></textarea>
                    <small id=ids::COUNTER class="char-counter" aria-live="polite">
                        {counter_text(0, DEFAULT_MAX_LENGTH)}
                    </small>
                </div>

                <div class="form-row form-row--check">
                    <input id=Field::Consent.id() name=Field::Consent.id() type="checkbox" required=true/>
                    <label for=Field::Consent.id()>"I agree to be contacted about my inquiry."</label>
                </div>

                // Honeypot: hidden from people, tempting to bots.
                <div class="hp-field" aria-hidden="true">
                    <label for=Field::Company.id()>"Company"</label>
                    <input
                        id=Field::Company.id()
                        name=Field::Company.id()
                        type="text"
                        tabindex="-1"
                        autocomplete="off"
                    />
                </div>

                <button id=ids::SUBMIT class="submit-button" type="submit">
                    <span class="submit-button__label">"Send message"</span>
                </button>
                <div id=ids::STATUS class="form-status" role="status" aria-live="polite"></div>
            </form>
        </main>

        <button id=ids::BACK_TO_TOP class="back-to-top" type="button" aria-label="Back to top">
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}
