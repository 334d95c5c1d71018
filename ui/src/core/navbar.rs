//! Installing the shared navbar fragment into a page.
//!
//! The fetch itself is browser-only; everything after it (status check,
//! injection, the one-time stylesheet link and link highlighting) goes through
//! [`NavbarPage`] so it runs the same against the DOM and against a fake.

use super::config::SiteConfig;
use super::error::{Result, SiteError};
use super::route::RoutePath;

/// A navigation link inside the mounted fragment.
pub trait NavLink {
    fn href(&self) -> Option<String>;
    /// Add or remove the active marker class and `aria-current="page"`.
    fn set_active(&self, active_class: &str, active: bool);
}

/// The page the fragment is mounted into.
pub trait NavbarPage {
    type Link: NavLink;

    /// Replace the mount's content with `html`.
    fn inject(&self, html: &str);
    fn has_stylesheet(&self, href: &str) -> bool;
    fn link_stylesheet(&self, href: &str) -> Result<()>;
    /// Links under the mount matching `selector`, in document order.
    fn links(&self, selector: &str) -> Vec<Self::Link>;
}

/// What the fragment request came back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentResponse {
    pub status: u16,
    pub body: String,
}

impl FragmentResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The fragment markup, or [`SiteError::FragmentStatus`] for a non-2xx reply.
pub fn accept_fragment(url: &str, response: FragmentResponse) -> Result<String> {
    if !response.is_success() {
        return Err(SiteError::FragmentStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

/// Link `href` unless the page already has it. Returns whether a link was added.
pub fn ensure_stylesheet<P: NavbarPage>(page: &P, href: &str) -> Result<bool> {
    if page.has_stylesheet(href) {
        return Ok(false);
    }
    page.link_stylesheet(href)?;
    Ok(true)
}

/// Mark the links matching `path` active and clear the rest. Returns the active count.
pub fn highlight_links<P: NavbarPage>(page: &P, config: &SiteConfig, path: &str) -> usize {
    let route = RoutePath::new(path);
    let mut active_count = 0;
    for link in page.links(&config.link_selector) {
        let active = route.matches_link(link.href().as_deref());
        link.set_active(&config.active_class, active);
        if active {
            active_count += 1;
        }
    }
    active_count
}

/// Inject a fetched fragment, link its stylesheet and highlight `path`.
///
/// A failed status leaves the page untouched. A stylesheet that cannot be
/// linked only costs styling, so it is logged and skipped.
pub fn install_fragment<P: NavbarPage>(
    page: &P,
    config: &SiteConfig,
    response: FragmentResponse,
    path: &str,
) -> Result<usize> {
    let html = accept_fragment(&config.fragment_url, response)?;
    page.inject(&html);
    if let Err(err) = ensure_stylesheet(page, &config.stylesheet_url) {
        tracing::warn!("navbar stylesheet not linked: {err}");
    }
    Ok(highlight_links(page, config, path))
}

/// Final word on a mount attempt: failures are logged here and go no further,
/// so the page stays usable without a navbar.
pub fn settle_mount<T>(outcome: Result<Option<T>>) -> Option<T> {
    match outcome {
        Ok(mounted) => mounted,
        Err(err) => {
            tracing::error!("Navbar load failed: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Default)]
    struct LinkState {
        classes: BTreeSet<String>,
        aria_current: bool,
    }

    #[derive(Clone)]
    struct FakeLink {
        href: Option<&'static str>,
        state: Rc<RefCell<LinkState>>,
    }

    impl FakeLink {
        fn new(href: Option<&'static str>) -> Self {
            Self {
                href,
                state: Rc::default(),
            }
        }

        fn is_marked(&self, class: &str) -> bool {
            let state = self.state.borrow();
            state.classes.contains(class) && state.aria_current
        }

        fn is_clear(&self, class: &str) -> bool {
            let state = self.state.borrow();
            !state.classes.contains(class) && !state.aria_current
        }
    }

    impl NavLink for FakeLink {
        fn href(&self) -> Option<String> {
            self.href.map(str::to_string)
        }

        fn set_active(&self, active_class: &str, active: bool) {
            let mut state = self.state.borrow_mut();
            if active {
                state.classes.insert(active_class.to_string());
            } else {
                state.classes.remove(active_class);
            }
            state.aria_current = active;
        }
    }

    #[derive(Default)]
    struct FakePage {
        injected: RefCell<Option<String>>,
        stylesheets: RefCell<Vec<String>>,
        links: Vec<FakeLink>,
        link_fails: bool,
    }

    impl FakePage {
        fn with_links(hrefs: &[Option<&'static str>]) -> Self {
            Self {
                links: hrefs.iter().map(|href| FakeLink::new(*href)).collect(),
                ..Self::default()
            }
        }
    }

    impl NavbarPage for FakePage {
        type Link = FakeLink;

        fn inject(&self, html: &str) {
            *self.injected.borrow_mut() = Some(html.to_string());
        }

        fn has_stylesheet(&self, href: &str) -> bool {
            self.stylesheets.borrow().iter().any(|linked| linked == href)
        }

        fn link_stylesheet(&self, href: &str) -> Result<()> {
            if self.link_fails {
                return Err(SiteError::MissingElement("head".into()));
            }
            self.stylesheets.borrow_mut().push(href.to_string());
            Ok(())
        }

        fn links(&self, _selector: &str) -> Vec<FakeLink> {
            self.links.clone()
        }
    }

    fn ok(body: &str) -> FragmentResponse {
        FragmentResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn installs_fragment_and_highlights_current_link() {
        let config = SiteConfig::default();
        let page = FakePage::with_links(&[Some("/"), Some("/blog"), Some("/contact/"), None]);

        let active = install_fragment(&page, &config, ok("<nav class=\"nv\"></nav>"), "/contact").unwrap();

        assert_eq!(active, 1);
        assert_eq!(page.injected.borrow().as_deref(), Some("<nav class=\"nv\"></nav>"));
        assert_eq!(*page.stylesheets.borrow(), vec!["/components/navbar.css"]);
        assert!(page.links[2].is_marked("is-active"));
        assert!(page.links[0].is_clear("is-active"));
        assert!(page.links[3].is_clear("is-active"));
    }

    #[test]
    fn stylesheet_is_linked_at_most_once() {
        let config = SiteConfig::default();
        let page = FakePage::default();

        install_fragment(&page, &config, ok("<nav></nav>"), "/").unwrap();
        install_fragment(&page, &config, ok("<nav></nav>"), "/").unwrap();

        assert_eq!(page.stylesheets.borrow().len(), 1);
        assert!(!ensure_stylesheet(&page, &config.stylesheet_url).unwrap());
        assert!(ensure_stylesheet(&page, "/other.css").unwrap());
    }

    #[test]
    fn rehighlighting_moves_the_marker() {
        let config = SiteConfig::default();
        let page = FakePage::with_links(&[Some("/"), Some("/blog")]);

        assert_eq!(highlight_links(&page, &config, "/"), 1);
        assert!(page.links[0].is_marked("is-active"));

        assert_eq!(highlight_links(&page, &config, "/blog/"), 1);
        assert!(page.links[0].is_clear("is-active"));
        assert!(page.links[1].is_marked("is-active"));

        assert_eq!(highlight_links(&page, &config, "/about"), 0);
        assert!(page.links.iter().all(|link| link.is_clear("is-active")));
    }

    #[test]
    fn configured_active_class_is_used() {
        let config = SiteConfig {
            active_class: "current".into(),
            ..SiteConfig::default()
        };
        let page = FakePage::with_links(&[Some("/blog")]);
        highlight_links(&page, &config, "/blog");
        assert!(page.links[0].is_marked("current"));
        assert!(!page.links[0].state.borrow().classes.contains("is-active"));
    }

    #[test]
    fn non_success_status_leaves_the_page_untouched() {
        let config = SiteConfig::default();
        let page = FakePage::with_links(&[Some("/")]);
        let response = FragmentResponse {
            status: 404,
            body: "not found".into(),
        };

        let err = install_fragment(&page, &config, response, "/").unwrap_err();

        assert!(matches!(
            err,
            SiteError::FragmentStatus { status: 404, ref url } if url == "/components/navbar.html"
        ));
        assert!(page.injected.borrow().is_none());
        assert!(page.stylesheets.borrow().is_empty());
        assert!(page.links[0].is_clear("is-active"));
    }

    #[test]
    fn success_range_is_2xx_only() {
        let status = |status| FragmentResponse {
            status,
            body: String::new(),
        };
        assert!(status(200).is_success());
        assert!(status(204).is_success());
        assert!(!status(199).is_success());
        assert!(!status(304).is_success());
        assert!(!status(500).is_success());
    }

    #[test]
    fn stylesheet_failure_does_not_block_the_navbar() {
        let config = SiteConfig::default();
        let page = FakePage {
            link_fails: true,
            ..FakePage::with_links(&[Some("/")])
        };

        let active = install_fragment(&page, &config, ok("<nav></nav>"), "/").unwrap();

        assert_eq!(active, 1);
        assert!(page.injected.borrow().is_some());
    }

    #[test]
    fn failed_mounts_are_swallowed() {
        let fetch_failed: Result<Option<u8>> = Err(SiteError::FragmentFetch {
            url: "/components/navbar.html".into(),
            reason: "network down".into(),
        });
        assert_eq!(settle_mount(fetch_failed), None);

        let bad_status: Result<Option<u8>> = Err(SiteError::FragmentStatus {
            url: "/components/navbar.html".into(),
            status: 500,
        });
        assert_eq!(settle_mount(bad_status), None);

        assert_eq!(settle_mount(Ok(None::<u8>)), None);
        assert_eq!(settle_mount(Ok(Some(7u8))), Some(7));
    }
}
