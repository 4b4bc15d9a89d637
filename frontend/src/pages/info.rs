//! 静态信息页面与 404

use crate::components::form::{SubmitButton, TextArea, TextField, field_error};
use crate::web::router::Link;
use charity_directory::validation::{ContactForm, FieldErrors};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const CONTACT_THANKS: &str = "Thank you for your message! We'll be in touch shortly.";

type Section = (&'static str, &'static str);

#[component]
fn InfoPage(
    title: &'static str,
    intro: &'static str,
    sections: &'static [Section],
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <article class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <header>
                <h1 class="text-4xl font-bold">{title}</h1>
                <p class="text-lg text-base-content/70 mt-2">{intro}</p>
            </header>
            {sections.iter().map(|(heading, body)| view! {
                <section>
                    <h2 class="text-2xl font-semibold mb-2">{*heading}</h2>
                    <p class="leading-relaxed">{*body}</p>
                </section>
            }).collect_view()}
            {children.map(|c| c())}
        </article>
    }
}

const ABOUT_SECTIONS: &[Section] = &[
    (
        "The Challenge We're Solving",
        "Thousands of small charities do remarkable work that never reaches the people who would support it. Without marketing budgets they stay unseen.",
    ),
    (
        "Our Comprehensive Solution",
        "We give verified nonprofits free digital promotion: a searchable profile, social media campaigns, and visibility on the platforms donors already use.",
    ),
    (
        "Global Amplification",
        "Quarterly award ceremonies spotlight outstanding organizations with professional video features, press releases and introductions to corporate partners.",
    ),
];

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! {
        <InfoPage title="About Us" intro="We help people see the unseen charities in their communities." sections=ABOUT_SECTIONS>
            <div class="card bg-primary text-primary-content">
                <div class="card-body items-center text-center">
                    <h2 class="card-title">"Ready to Amplify Your Impact?"</h2>
                    <Link to="/list-your-charity" class="btn">"List Your Charity"</Link>
                </div>
            </div>
        </InfoPage>
    }
}

const ADVERTISE_SECTIONS: &[Section] = &[
    (
        "Reach Engaged Supporters",
        "Our visitors are actively looking for causes to support. Sponsored placements appear on the home page alongside featured organizations.",
    ),
    (
        "Purpose-Driven Partnerships",
        "We only accept advertising from businesses whose values align with our community. Every placement is reviewed before it goes live.",
    ),
];

#[component]
pub fn AdvertisePage() -> impl IntoView {
    view! {
        <InfoPage title="Advertise With Us" intro="Support the platform while reaching people who care." sections=ADVERTISE_SECTIONS>
            <Link to="/contact" class="btn btn-primary self-start">"Contact our team"</Link>
        </InfoPage>
    }
}

const LIST_SECTIONS: &[Section] = &[
    (
        "Eligibility Requirements",
        "Registered nonprofit status, a clear mission statement and a named administrator who can verify the organization's details.",
    ),
    ("1. Apply", "Complete our comprehensive application form with your organization details."),
    ("2. Verification", "Our team reviews your documents and verifies your nonprofit status."),
    ("3. Go Live", "Once approved, your charity profile goes live on our platform."),
];

#[component]
pub fn ListYourCharityPage() -> impl IntoView {
    view! {
        <InfoPage title="List Your Charity" intro="Listing is free for verified nonprofits." sections=LIST_SECTIONS>
            <div class="flex gap-2">
                <Link to="/organization-signup" class="btn btn-primary">"Ready to Get Started?"</Link>
                <Link to="/organization-login" class="btn btn-ghost">"Already listed? Sign in"</Link>
            </div>
        </InfoPage>
    }
}

const PRIVACY_SECTIONS: &[Section] = &[
    (
        "Information We Collect",
        "Account details you provide (name, email), bookmarks, search history and notification preferences.",
    ),
    (
        "How We Use It",
        "To run your account, personalise search results and send the notifications you opted into. We never sell personal data.",
    ),
    (
        "Your Choices",
        "You can edit your profile, clear your search history and change notification preferences at any time.",
    ),
];

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <InfoPage title="Privacy Policy" intro="How we handle your information." sections=PRIVACY_SECTIONS /> }
}

const TERMS_SECTIONS: &[Section] = &[
    ("Using the Platform", "You agree to provide accurate information and to use the directory lawfully."),
    (
        "Organization Listings",
        "Organizations are responsible for the accuracy of their profiles. Listings may be removed if verification fails.",
    ),
    ("Liability", "We do not handle donations and are not party to any transaction between donors and charities."),
];

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! { <InfoPage title="Terms of Service" intro="The rules for using the directory." sections=TERMS_SECTIONS /> }
}

const COOKIE_SECTIONS: &[Section] = &[
    (
        "Essential Storage",
        "We keep your sign-in tokens in your browser's local storage so you stay logged in between visits.",
    ),
    ("Analytics", "We do not use third-party tracking cookies."),
];

#[component]
pub fn CookiePolicyPage() -> impl IntoView {
    view! { <InfoPage title="Cookie Policy" intro="What we store in your browser." sections=COOKIE_SECTIONS /> }
}

const HELP_TOPICS: &[Section] = &[
    ("How do I list my organization?", "Get your organization on the directory by completing the organization signup form. Applications are reviewed before going live."),
    ("How do I create an account?", "Join our community of supporters from the Sign Up page, or continue with Google."),
    ("How do I find charities near me?", "Discover organizations near you with the location selector in the navigation bar."),
    ("How do bookmarks work?", "Sign in and press Bookmark on any organization page. Your bookmarks appear on your dashboard."),
    ("I forgot my password", "Use the Forgot Password link on the login page and we'll email you a reset link."),
    ("How do I stop emails?", "Open Notification Settings and disable the email notifications you don't want."),
];

#[component]
pub fn HelpCenterPage() -> impl IntoView {
    let filter = RwSignal::new(String::new());
    let matches = move || {
        let needle = filter.get().to_lowercase();
        HELP_TOPICS
            .iter()
            .filter(|(q, a)| {
                needle.is_empty() || q.to_lowercase().contains(&needle) || a.to_lowercase().contains(&needle)
            })
            .copied()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-4xl font-bold">"Help Center"</h1>
            <input
                type="search"
                class="input input-bordered w-full"
                placeholder="Search help topics"
                prop:value=filter
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            {move || {
                let topics = matches();
                if topics.is_empty() {
                    return view! {
                        <p class="text-base-content/60">"Try different keywords or browse our help topics."</p>
                    }
                    .into_any();
                }
                topics.into_iter().map(|(question, answer)| view! {
                    <div class="collapse collapse-arrow bg-base-100 shadow">
                        <input type="checkbox" />
                        <div class="collapse-title font-medium">{question}</div>
                        <div class="collapse-content"><p>{answer}</p></div>
                    </div>
                }).collect_view().into_any()
            }}
            <p>
                "Still need help? "
                <Link to="/contact" class="link link-primary">"Contact us"</Link>
            </p>
        </div>
    }
}

/// 联系页：本地校验后直接显示成功提示，不调用后端
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!(subject = %form.subject, "contact form submitted");
                errors.set(FieldErrors::default());
                sent.set(true);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-4xl font-bold">"Contact Us"</h1>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <div class="alert alert-success">{CONTACT_THANKS}</div> }
            >
                <form class="card bg-base-100 shadow" on:submit=on_submit.clone()>
                    <div class="card-body">
                        <TextField label="Name" name="name" value=name error=field_error(errors, "name") />
                        <TextField label="Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                        <TextField label="Subject" name="subject" value=subject error=field_error(errors, "subject") />
                        <TextArea label="Message" name="message" value=message error=field_error(errors, "message") />
                        <SubmitButton label="Send Message" busy_label="Sending..." busy=Signal::stored(false) />
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center flex flex-col gap-4 items-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link to="/" class="btn btn-primary">"Back to home"</Link>
            </div>
        </div>
    }
}
