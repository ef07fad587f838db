// src/views/pages.rs
// DOCUMENTATION: Informational pages
// PURPOSE: Home, about, aarti schedule and contact markup

use crate::models::content::{
    AARTI_SCHEDULE, CONTACT_DETAILS, FEATURES, GALLERY_PREVIEW, HISTORY, MAP_EMBED_URL,
    UPCOMING_EVENTS,
};
use crate::models::ContactForm;
use crate::views::layout::{escape, page, page_hero};
use std::collections::BTreeMap;

pub fn home() -> String {
    let schedule: String = AARTI_SCHEDULE
        .iter()
        .filter(|aarti| aarti.featured)
        .map(|aarti| {
            format!(
                r#"<li><strong>{}</strong><span class="time">{}</span><span>{}</span></li>"#,
                escape(aarti.name),
                escape(aarti.start_time()),
                escape(aarti.summary)
            )
        })
        .collect();

    let events: String = UPCOMING_EVENTS
        .iter()
        .map(|event| {
            format!(
                r#"<article class="card"><span class="date">{}</span><h3>{}</h3><p>{}</p></article>"#,
                escape(event.date),
                escape(event.title),
                escape(event.description)
            )
        })
        .collect();

    let tiles: String = GALLERY_PREVIEW
        .iter()
        .map(|tile| {
            let class = if tile.wide { "tile wide" } else { "tile" };
            format!(
                r#"<img class="{}" src="{}" alt="{}" loading="lazy">"#,
                class,
                tile.src,
                escape(tile.alt)
            )
        })
        .collect();

    let content = format!(
        r#"<section class="hero">
<span class="eyebrow">॥ श्री राधे कृष्ण ॥</span>
<h1>Welcome to the Divine Abode</h1>
<p>Experience the eternal love of Radha Krishna at Jagdish Temple, Udaipur.</p>
<div class="actions"><a class="button" href="/aarti">Aarti Timings</a><a class="button outline" href="/gallery">View Gallery</a></div>
</section>
<section class="schedule"><h2>Daily Darshan Schedule</h2><ul>{}</ul><a href="/aarti">Full aarti schedule</a></section>
<section class="events"><h2>Upcoming Events</h2><div class="card-grid">{}</div></section>
<section class="gallery-preview"><h2>Photo Gallery</h2>
<p>Explore the beauty of our temple through photographs capturing sacred ceremonies, festivals, and daily darshan.</p>
<div class="preview-grid">{}</div><a class="button" href="/gallery">View Full Gallery</a></section>"#,
        schedule, events, tiles
    );

    page("Home", Some("/"), &content)
}

pub fn about() -> String {
    let timeline: String = HISTORY
        .iter()
        .map(|milestone| {
            format!(
                r#"<li><span class="year">{}</span><h3>{}</h3><p>{}</p></li>"#,
                escape(milestone.year),
                escape(milestone.title),
                escape(milestone.description)
            )
        })
        .collect();

    let features: String = FEATURES
        .iter()
        .map(|feature| {
            format!(
                r#"<article class="card"><h3>{}</h3><p>{}</p></article>"#,
                escape(feature.title),
                escape(feature.description)
            )
        })
        .collect();

    let content = format!(
        r#"{}
<img class="feature-image" src="/assets/gallery/temple-interior.jpeg" alt="Temple Interior">
<section class="timeline"><h2>Our Journey Through Time</h2><ol>{}</ol></section>
<section class="features"><h2>What Makes Us Special</h2><div class="card-grid">{}</div></section>"#,
        page_hero(
            "हमारे बारे में • About Us",
            "The Sacred Story of Jagdish Temple",
            "For over 170 years, our temple has been a beacon of spiritual light, welcoming devotees from around the world to experience the divine presence of Lord Krishna and Radha Rani."
        ),
        timeline,
        features
    );

    page("About", Some("/about"), &content)
}

pub fn aarti() -> String {
    let slots: String = AARTI_SCHEDULE
        .iter()
        .map(|aarti| {
            format!(
                r#"<article class="card aarti"><span class="time">{}</span><h3>{}</h3><p class="hindi">{}</p><p>{}</p><p class="significance">{}</p></article>"#,
                escape(aarti.time),
                escape(aarti.name),
                escape(aarti.name_hi),
                escape(aarti.description),
                escape(aarti.significance)
            )
        })
        .collect();

    let content = format!(
        r#"{}
<section class="aarti-schedule"><div class="card-grid">{}</div></section>
<img class="feature-image" src="/assets/aarti-ceremony.jpg" alt="Aarti Ceremony">"#,
        page_hero(
            "आरती • Aarti",
            "Daily Aarti Schedule",
            "Join us for the sacred aarti ceremonies throughout the day."
        ),
        slots
    );

    page("Aarti", Some("/aarti"), &content)
}

/// Outcome of the last contact submission
pub enum ContactNotice {
    None,
    Sent,
    Invalid(BTreeMap<String, String>),
}

pub fn contact(form: &ContactForm, notice: &ContactNotice) -> String {
    let info: String = CONTACT_DETAILS
        .iter()
        .map(|detail| {
            let lines: String = detail
                .lines
                .iter()
                .map(|line| format!("<p>{}</p>", escape(line)))
                .collect();
            format!(r#"<div class="info"><h3>{}</h3>{}</div>"#, escape(detail.title), lines)
        })
        .collect();

    let no_errors = BTreeMap::new();
    let (banner, errors) = match notice {
        ContactNotice::None => (String::new(), &no_errors),
        ContactNotice::Sent => (
            r#"<div class="notice success"><strong>Message Sent Successfully!</strong> We will get back to you soon. Hare Krishna! 🙏</div>"#.to_string(),
            &no_errors,
        ),
        ContactNotice::Invalid(errors) => (
            r#"<div class="notice error">Please correct the highlighted fields.</div>"#.to_string(),
            errors,
        ),
    };

    let field = |name: &str, label: &str, kind: &str, value: &str| -> String {
        let error = errors
            .get(name)
            .map(|e| format!(r#"<span class="field-error">{}</span>"#, escape(e)))
            .unwrap_or_default();
        let input = if kind == "textarea" {
            format!(r#"<textarea name="{}" rows="5">{}</textarea>"#, name, escape(value))
        } else {
            format!(r#"<input type="{}" name="{}" value="{}">"#, kind, name, escape(value))
        };
        format!(r#"<label>{}{}{}</label>"#, escape(label), input, error)
    };

    let content = format!(
        r#"{hero}
<section class="contact">
<div class="contact-info"><h2>Temple Information</h2>{info}
<iframe src="{map}" width="100%" height="300" style="border:0" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade" title="Temple Location"></iframe>
</div>
<div class="contact-form"><h2>Send us a Message</h2><p>Fill out the form below and we'll respond as soon as possible.</p>
{banner}
<form method="post" action="/contact">{name}{email}{phone}{message}<button class="button" type="submit">Send Message</button></form>
</div>
</section>"#,
        hero = page_hero(
            "संपर्क करें • Contact Us",
            "Get in Touch",
            "Have questions about temple services, events, or visiting? We'd love to hear from you. Reach out to us anytime."
        ),
        info = info,
        map = escape(MAP_EMBED_URL),
        banner = banner,
        name = field("name", "Your Name", "text", &form.name),
        email = field("email", "Email Address", "email", &form.email),
        phone = field("phone", "Phone Number", "tel", &form.phone),
        message = field("message", "Your Message", "textarea", &form.message),
    );

    page("Contact", Some("/contact"), &content)
}
