// src/views/admin.rs
// DOCUMENTATION: Admin photo table
// PURPOSE: Add, quick-upload, edit and delete forms over the editor's list

use crate::models::Photo;
use crate::views::layout::{escape, page};

/// Admin page. `error` carries the store's raw message from the last action.
pub fn admin(key: &str, photos: &[Photo], error: Option<&str>) -> String {
    let key_param = format!("key={}", urlencoding::encode(key));
    let action = |path: &str| escape(&format!("{}?{}", path, key_param));

    let banner = error
        .map(|message| format!(r#"<div class="notice error" role="alert">{}</div>"#, escape(message)))
        .unwrap_or_default();

    let rows: String = photos
        .iter()
        .map(|photo| {
            format!(
                r#"<tr>
<td><img class="thumb" src="{src}" alt="{title}"></td>
<td><form method="post" enctype="multipart/form-data" action="{edit}">
<input type="text" name="title" value="{title}" required>
<input type="date" name="photo_date" value="{date}" required>
<input type="file" name="file" accept="image/*">
<button class="button" type="submit">Save</button></form></td>
<td><form method="post" action="{delete}"><button class="button danger" type="submit">Delete</button></form></td>
</tr>"#,
                src = escape(&photo.image_url),
                title = escape(&photo.title),
                date = photo.photo_date.format("%Y-%m-%d"),
                edit = action(&format!("/admin/photos/{}", photo.id)),
                delete = action(&format!("/admin/photos/{}/delete", photo.id)),
            )
        })
        .collect();

    let upload_form = |path: &str, heading: &str| {
        format!(
            r#"<form class="card" method="post" enctype="multipart/form-data" action="{}"><h2>{}</h2>
<input type="text" name="title" placeholder="Title">
<input type="date" name="photo_date">
<input type="file" name="file" accept="image/*">
<button class="button" type="submit">Upload</button></form>"#,
            action(path),
            heading
        )
    };

    let content = format!(
        r#"<section class="admin"><h1>Admin Gallery Manager</h1>
{banner}
<div class="card-grid">{add}{quick}</div>
<table class="admin-table"><thead><tr><th>Image</th><th>Details</th><th></th></tr></thead><tbody>{rows}</tbody></table>
<p class="count">{count} photo(s)</p>
</section>"#,
        banner = banner,
        add = upload_form("/admin/photos", "Add Photo"),
        quick = upload_form("/admin/upload", "Quick Upload"),
        rows = rows,
        count = photos.len(),
    );

    page("Admin", None, &content)
}
