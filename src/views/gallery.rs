// src/views/gallery.rs
// DOCUMENTATION: Public gallery grid and lightbox markup

use crate::models::{Category, Photo};
use crate::services::{GalleryFilter, Lightbox};
use crate::views::layout::{escape, page, page_hero};

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

pub fn gallery(filter: &GalleryFilter, photos: &[Photo]) -> String {
    let buttons: String = Category::VARIANTS
        .iter()
        .map(|category| {
            let class = if *category == filter.category { "chip active" } else { "chip" };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                escape(&with_query("/gallery", &filter.with_category(*category).query_string())),
                category.display_name()
            )
        })
        .collect();

    let date_value = filter
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let clear = if filter.is_active() {
        r#"<a class="chip clear" href="/gallery">Clear</a>"#
    } else {
        ""
    };

    let filters = format!(
        r#"<section class="filters"><div class="categories">{buttons}</div>
<form method="get" action="/gallery"><input type="hidden" name="category" value="{category}"><input type="date" name="date" value="{date}" aria-label="Search by date"><button class="button" type="submit">Search</button></form>{clear}</section>"#,
        buttons = buttons,
        category = filter.category,
        date = date_value,
        clear = clear,
    );

    let grid = if photos.is_empty() {
        r#"<section class="empty"><p>No photos found for the selected filters.</p><a class="button" href="/gallery">Clear Filters</a></section>"#.to_string()
    } else {
        let query = filter.query_string();
        let tiles: String = photos
            .iter()
            .map(|photo| {
                format!(
                    r#"<a class="photo" href="{href}"><img src="{src}" alt="{alt}" loading="lazy"><span class="caption"><strong>{alt}</strong><span>{date}</span></span></a>"#,
                    href = escape(&with_query(&format!("/gallery/photos/{}", photo.id), &query)),
                    src = escape(&photo.image_url),
                    alt = escape(&photo.title),
                    date = photo.photo_date.format("%b %d, %Y"),
                )
            })
            .collect();
        format!(r#"<section class="photo-grid">{}</section>"#, tiles)
    };

    let content = format!(
        "{}\n{}\n{}",
        page_hero(
            "फोटो गैलरी • Photo Gallery",
            "Temple Gallery",
            "Browse temple photos by category or search by date."
        ),
        filters,
        grid
    );

    page("Gallery", Some("/gallery"), &content)
}

/// Lightbox page; `lightbox` must have a photo open
pub fn lightbox(filter: &GalleryFilter, lightbox: &Lightbox) -> Option<String> {
    if lightbox.is_empty() {
        return None;
    }
    let photo = lightbox.current()?;
    let query = filter.query_string();

    let nav_link = |id: Option<uuid::Uuid>, class: &str, label: &str| -> String {
        id.map(|id| {
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                escape(&with_query(&format!("/gallery/photos/{}", id), &query)),
                label
            )
        })
        .unwrap_or_default()
    };

    let content = format!(
        r#"<section class="lightbox">
<a class="close" href="{close}">Close</a>
{prev}
<figure><img src="{src}" alt="{title}"><figcaption><h2>{title}</h2><p>{date}</p><p class="position">{position} / {total}</p></figcaption></figure>
{next}
<a class="button download" href="{src}" download="{file_name}">Download</a>
</section>"#,
        close = escape(&with_query("/gallery", &query)),
        prev = nav_link(lightbox.peek_prev_id(), "prev", "Previous"),
        next = nav_link(lightbox.peek_next_id(), "next", "Next"),
        src = escape(&photo.image_url),
        title = escape(&photo.title),
        date = photo.photo_date.format("%B %d, %Y"),
        position = lightbox.index() + 1,
        total = lightbox.len(),
        file_name = escape(&photo.download_file_name()),
    );

    Some(page(&photo.title, Some("/gallery"), &content))
}
