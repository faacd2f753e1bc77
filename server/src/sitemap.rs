//! Sitemap rendering.
//!
//! Lists every page route of the site as an absolute URL.

use tracing::debug;

use crate::config::ServerConfig;

/// Change frequency hint for a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Monthly,
    Yearly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Change frequency and priority for a page path.
fn hints(path: &str) -> (ChangeFreq, f32) {
    match path {
        "/" => (ChangeFreq::Monthly, 1.0),
        "/trips" => (ChangeFreq::Monthly, 0.8),
        _ => (ChangeFreq::Yearly, 0.5),
    }
}

/// Escape the XML special characters of a URL.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render `sitemap.xml` for `paths`.
pub fn render(config: &ServerConfig, paths: &[&str]) -> String {
    debug!(count = paths.len(), "rendering sitemap");

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for path in paths {
        let (changefreq, priority) = hints(path);
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&config.url_for(path))
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            changefreq.as_str()
        ));
        xml.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
