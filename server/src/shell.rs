//! HTML shell returned for page routes.
//!
//! The document carries no content of its own: it links the stylesheet and
//! boots the wasm bundle, which renders the page client-side.

use crate::config::ServerConfig;

/// Render the shell for the configured bundle.
pub fn render(config: &ServerConfig) -> String {
    let pkg = config.site_pkg_dir.trim_matches('/');
    let name = &config.output_name;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link rel="icon" href="/favicon.ico" />
    <link rel="stylesheet" href="/{pkg}/{name}.css" />
    <link rel="modulepreload" href="/{pkg}/{name}.js" />
    <link rel="preload" href="/{pkg}/{name}.wasm" as="fetch" type="application/wasm" crossorigin="" />
    <script type="module">
      import init from '/{pkg}/{name}.js';
      init({{ module_or_path: '/{pkg}/{name}.wasm' }});
    </script>
  </head>
  <body></body>
</html>
"#
    )
}
