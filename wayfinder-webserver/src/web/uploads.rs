use std::path::Path;

use rocket::fs::TempFile;

use wayfinder_core::{entities::Id, util::validate::sanitize_filename};

use super::error::Error;

/// Persist an uploaded image below the uploads directory and return the
/// stored filename. Uploads without a usable filename are discarded.
pub async fn store_image(
    uploads_dir: &Path,
    image: &mut TempFile<'_>,
) -> Result<Option<String>, Error> {
    if image.len() == 0 {
        return Ok(None);
    }
    let Some(raw_name) = image.raw_name() else {
        return Ok(None);
    };
    let Some(name) = sanitize_filename(raw_name.dangerous_unsafe_unsanitized_raw().as_str()) else {
        return Ok(None);
    };
    let filename = format!("{}-{}", Id::new(), name);
    // copy instead of rename, the temp dir may live on another filesystem
    image.move_copy_to(uploads_dir.join(&filename)).await?;
    debug!("Stored uploaded image as {filename}");
    Ok(Some(filename))
}
