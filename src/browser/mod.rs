use anyhow::{Context, Result};

use crate::directory::career_page_url;

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

/// Open a career's page on the site. Returns the URL that was opened.
pub fn open_career_page(site_url: &str, slug: &str) -> Result<String> {
    let url = career_page_url(site_url, slug);
    open_url(&url)?;
    Ok(url)
}
