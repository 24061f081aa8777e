//! Server-rendered portfolio pages.
//!
//! Templates are loaded once at startup from `TEMPLATES_DIR`. Rendering never
//! touches the inference provider.

pub mod handlers;

use tera::{Context, Tera};
use tracing::{info, warn};

/// The site's pages and the template each one renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Architecture,
    Playground,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Projects,
        Page::Architecture,
        Page::Playground,
    ];

    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Projects => "projects.html",
            Page::Architecture => "architecture.html",
            Page::Playground => "playground.html",
        }
    }

    /// Key the navigation uses to highlight the current page.
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Architecture => "architecture",
            Page::Playground => "playground",
        }
    }
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Parses every `*.html` under `templates_dir`. A template with a syntax
    /// error fails here rather than on first request.
    pub fn from_dir(templates_dir: &str) -> Result<Self, tera::Error> {
        let tera = Tera::new(&format!("{}/**/*.html", templates_dir.trim_end_matches('/')))?;
        info!(
            "Loaded {} templates from {templates_dir}",
            tera.get_template_names().count()
        );
        for page in Page::ALL {
            if !tera.get_template_names().any(|name| name == page.template()) {
                warn!("Template {} is missing; {:?} will return 500", page.template(), page);
            }
        }
        Ok(Self { tera })
    }

    #[cfg(test)]
    pub fn from_tera(tera: Tera) -> Self {
        Self { tera }
    }

    pub fn render(&self, page: Page) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("active", page.nav_key());
        context.insert("version", env!("CARGO_PKG_VERSION"));
        self.tera.render(page.template(), &context)
    }
}
