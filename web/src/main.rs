use dioxus::prelude::*;

use ui::components::{ActiveLanguage, BookCallModal, ModalHost, SiteFooter, SiteNavbar};
use ui::core::SiteConfig;
use ui::i18n;
use ui::views::{Blog, BlogPost, Contact, Home, Leads, NotFound, Playbook};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
    #[route("/blog/:slug")]
    BlogPost { slug: String },
    #[route("/contact")]
    Contact {},
    #[route("/playbook")]
    Playbook {},
    #[route("/leads")]
    Leads {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Deployment overrides for fragment paths, selectors and storage naming.
const SITE_CONFIG_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.json"));

fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(SITE_CONFIG_JSON).unwrap_or_else(|err| {
        tracing::warn!("{err}; falling back to built-in defaults");
        SiteConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let language = i18n::init();
    let config = use_context_provider(load_site_config);
    use_context_provider(|| ActiveLanguage(Signal::new(language)));
    use_hook(|| ui::leads::install_console_exports(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Navbar mount, page outlet, footer and the shared "book a call" dialog.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    rsx! {
        ModalHost {
            SiteNavbar { path }
            main { class: "site-main", Outlet::<Route> {} }
            SiteFooter {}
            BookCallModal {}
        }
    }
}
