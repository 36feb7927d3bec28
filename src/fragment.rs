//! Navigation fragment location and injection.

use crate::error::SiteNavError;
use url::Url;

/// Something that can hold the fetched navigation markup.
pub trait FragmentMount {
    /// Replace the mount's entire contents.
    fn replace_markup(&mut self, html: &str);
}

/// Normalize a base prefix so it ends in exactly one `/`.
///
/// An empty base stays empty: the fragment then resolves against the page.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}/", trimmed.trim_end_matches('/'))
}

/// Resolve the fragment URL against the document base URI, which is the
/// page URL unless a `<base href>` element says otherwise.
pub fn fragment_url(base_uri: &str, base: &str, partial_path: &str) -> Result<Url, SiteNavError> {
    let invalid = |reason: String| SiteNavError::InvalidUrl {
        base: base.to_string(),
        reason,
    };
    let page = Url::parse(base_uri).map_err(|e| invalid(format!("page url: {}", e)))?;
    let relative = format!("{}{}", normalize_base(base), partial_path.trim_start_matches('/'));
    page.join(&relative)
        .map_err(|e| invalid(format!("{}: {}", relative, e)))
}

/// Put fetched markup into the mount.
///
/// The mount is only touched when the fetch succeeded; on failure its prior
/// contents stay as they were and the error is handed back for logging.
pub fn inject<M: FragmentMount>(
    mount: Option<&mut M>,
    mount_id: &str,
    fetched: Result<String, SiteNavError>,
) -> Result<(), SiteNavError> {
    let html = fetched?;
    let mount = mount.ok_or_else(|| SiteNavError::MountMissing(mount_id.to_string()))?;
    mount.replace_markup(&html);
    Ok(())
}
