//! Google Maps links for a "lat,lon" coordinate string.

use reqwest::Url;

/// Zoom level used when the user config does not set one.
pub const DEFAULT_ZOOM: u8 = 12;

const SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Builds a map URL pointing at the exact coordinates in `loc`.
///
/// `loc` is expected in the `"lat,lon"` form ipinfo returns. Surrounding
/// whitespace around either part is ignored; anything after a second comma
/// is dropped. Returns `None` when `loc` is absent or either part is empty.
///
/// # Example
/// ```
/// use iplocate::maps::{exact_link, DEFAULT_ZOOM};
/// let link = exact_link(Some("48.8534,2.3488"), DEFAULT_ZOOM).unwrap();
/// assert!(link.contains("query=48.8534%2C2.3488"));
/// ```
#[must_use]
pub fn exact_link(loc: Option<&str>, zoom: u8) -> Option<String> {
  let mut parts = loc?.split(',').map(str::trim);
  let lat = parts.next().filter(|s| !s.is_empty())?;
  let lon = parts.next().filter(|s| !s.is_empty())?;

  let query = format!("{lat},{lon}");
  let zoom = zoom.to_string();
  Url::parse_with_params(
    SEARCH_URL,
    [("api", "1"), ("query", query.as_str()), ("zoom", zoom.as_str())],
  )
  .ok()
  .map(String::from)
}
