// src/views/layout.rs
// DOCUMENTATION: Shared page chrome
// PURPOSE: Header navigation, footer and HTML escaping for every page

use crate::models::content::CONTACT_DETAILS;

/// Top navigation entries: (path, label)
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/aarti", "Aarti"),
    ("/gallery", "Gallery"),
    ("/contact", "Contact"),
];

/// Escape text for element content and quoted attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap page content in the site layout
/// `active` is the nav path to highlight, if any
pub fn page(title: &str, active: Option<&str>, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Jagdish Temple</title>
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
{header}
<main>
{content}
</main>
{footer}
</body>
</html>"#,
        title = escape(title),
        header = header(active),
        content = content,
        footer = footer(),
    )
}

/// Hero banner used at the top of inner pages
pub fn page_hero(eyebrow: &str, heading: &str, lead: &str) -> String {
    format!(
        r#"<section class="page-hero"><span class="eyebrow">{}</span><h1>{}</h1><p>{}</p></section>"#,
        escape(eyebrow),
        escape(heading),
        escape(lead)
    )
}

fn header(active: Option<&str>) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(path, label)| {
            let class = if Some(*path) == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{}>{}</a>"#, path, class, label)
        })
        .collect();

    format!(
        r#"<header class="site-header"><a class="brand" href="/">श्री जगदीश मंदिर</a><nav>{}</nav></header>"#,
        links
    )
}

fn footer() -> String {
    let details: String = CONTACT_DETAILS
        .iter()
        .map(|detail| {
            let lines: String = detail
                .lines
                .iter()
                .map(|line| format!("<p>{}</p>", escape(line)))
                .collect();
            format!(r#"<div><h4>{}</h4>{}</div>"#, escape(detail.title), lines)
        })
        .collect();

    format!(
        r#"<footer class="site-footer"><div class="footer-grid">{}</div><p class="copyright">Jagdish Temple Trust. Hare Krishna.</p></footer>"#,
        details
    )
}
