//! `robots.txt` rendering.

use crate::config::ServerConfig;

/// Render `robots.txt`, pointing crawlers at the sitemap.
pub fn render(config: &ServerConfig) -> String {
    let mut robots = String::from("User-agent: *\n");
    robots.push_str("Allow: /\n");
    robots.push_str(&format!("Sitemap: {}\n", config.url_for("/sitemap.xml")));
    robots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_content() {
        let config = ServerConfig {
            base_url: "https://thomp.dev".to_string(),
            ..ServerConfig::default()
        };

        assert_eq!(
            render(&config),
            "User-agent: *\nAllow: /\nSitemap: https://thomp.dev/sitemap.xml\n"
        );
    }
}
