/// Image host every stored image identifier is relative to.
pub const IMAGE_BASE_URL: &str = "https://imagizer.imageshack.com/v2/640x480q70/";

/// Turn stored image identifiers into absolute URLs.
///
/// Identifiers mentioning `png` already carry their extension; anything else is
/// a JPEG. Values that are already absolute pass through, so completing twice
/// yields the same list.
pub fn complete_image_urls(images: Option<Vec<String>>) -> Option<Vec<String>> {
    images.map(|ids| ids.into_iter().map(complete_image_url).collect())
}

fn complete_image_url(id: String) -> String {
    if id.starts_with("http://") || id.starts_with("https://") {
        id
    } else if id.contains("png") {
        format!("{IMAGE_BASE_URL}{id}")
    } else {
        format!("{IMAGE_BASE_URL}{id}.jpg")
    }
}

/// Inverse of the completion: the bare stored identifier behind an image URL.
///
/// Values that do not point at the image host are returned unchanged.
pub fn image_id(url: &str) -> &str {
    match url.strip_prefix(IMAGE_BASE_URL) {
        Some(id) if id.contains("png") => id,
        Some(id) => id.strip_suffix(".jpg").unwrap_or(id),
        None => url,
    }
}

/// Strip every completed URL in the list back to its identifier.
pub fn strip_image_urls(images: Option<Vec<String>>) -> Option<Vec<String>> {
    images.map(|urls| {
        urls.into_iter()
            .map(|url| image_id(&url).to_string())
            .collect()
    })
}
