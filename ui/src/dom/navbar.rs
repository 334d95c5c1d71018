//! Navbar loader: fetch the shared fragment, inject it, highlight the current
//! route and wire the mobile drawer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, Node, Request, RequestCredentials,
    RequestInit, Response,
};

use crate::core::config::SiteConfig;
use crate::core::drawer::{Drawer, DrawerKey, DrawerView, KeyOutcome};
use crate::core::error::{Result, SiteError};
use crate::core::focus::{Focusable, FOCUSABLE_SELECTOR};
use crate::core::navbar::{self, FragmentResponse, NavLink, NavbarPage};
use crate::core::platform;

use super::listener::EventListenerGuard;
use super::{describe_js, document, window};

impl Focusable for HtmlElement {
    fn focus(&self) {
        let _ = HtmlElement::focus(self);
    }

    fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    fn is_connected(&self) -> bool {
        Node::is_connected(self)
    }
}

type SharedDrawer = Rc<RefCell<Drawer<DomDrawerView>>>;

pub struct DomDrawerView {
    document: Document,
    toggle: HtmlElement,
    drawer: HtmlElement,
    handle: Weak<RefCell<Drawer<DomDrawerView>>>,
}

pub struct DrawerListeners {
    _keydown: EventListenerGuard,
    _outside_click: EventListenerGuard,
}

impl DomDrawerView {
    fn contains(&self, target: Option<&Node>) -> bool {
        self.drawer.contains(target) || self.toggle.contains(target)
    }
}

impl DrawerView for DomDrawerView {
    type Element = HtmlElement;
    type Listeners = DrawerListeners;

    fn active_element(&self) -> Option<HtmlElement> {
        self.document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn set_drawer_hidden(&self, hidden: bool) {
        self.drawer.set_hidden(hidden);
    }

    fn set_toggle_expanded(&self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        let _ = self.toggle.set_attribute("aria-expanded", value);
    }

    fn focusables(&self) -> Vec<HtmlElement> {
        let Ok(nodes) = self.drawer.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|idx| nodes.get(idx))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn attach_listeners(&self) -> DrawerListeners {
        let on_key = self.handle.clone();
        let keydown = EventListenerGuard::new(&self.document, "keydown", false, move |event: Event| {
            let Some(drawer) = on_key.upgrade() else {
                return;
            };
            let Ok(key_event) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            let key = DrawerKey::from_dom(&key_event.key(), key_event.shift_key());
            let Ok(mut drawer) = drawer.try_borrow_mut() else {
                return;
            };
            if drawer.handle_key(key) == KeyOutcome::FocusMoved {
                key_event.prevent_default();
            }
        });

        let on_click = self.handle.clone();
        let outside_click = EventListenerGuard::new(&self.document, "click", true, move |event: Event| {
            let Some(drawer) = on_click.upgrade() else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let Ok(mut drawer) = drawer.try_borrow_mut() else {
                return;
            };
            let inside = drawer.view().contains(target.as_ref());
            drawer.handle_pointer(inside);
        });

        DrawerListeners {
            _keydown: keydown,
            _outside_click: outside_click,
        }
    }
}

impl NavLink for Element {
    fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }

    fn set_active(&self, active_class: &str, active: bool) {
        let _ = self.class_list().toggle_with_force(active_class, active);
        if active {
            let _ = self.set_attribute("aria-current", "page");
        } else {
            let _ = self.remove_attribute("aria-current");
        }
    }
}

/// The document plus the navbar mount element.
#[derive(Clone)]
pub struct DomPage {
    document: Document,
    mount: Element,
}

impl NavbarPage for DomPage {
    type Link = Element;

    fn inject(&self, html: &str) {
        self.mount.set_inner_html(html);
    }

    fn has_stylesheet(&self, href: &str) -> bool {
        let selector = format!("link[href=\"{href}\"]");
        matches!(self.document.query_selector(&selector), Ok(Some(_)))
    }

    fn link_stylesheet(&self, href: &str) -> Result<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| SiteError::MissingElement("head".into()))?;
        let link = self
            .document
            .create_element("link")
            .map_err(|_| SiteError::MissingElement("link".into()))?;
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", href);
        head.append_child(&link)
            .map_err(|_| SiteError::MissingElement("head".into()))?;
        Ok(())
    }

    fn links(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.mount.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|idx| nodes.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

/// A mounted navbar. Dropping it unregisters every listener it installed.
pub struct MountedNavbar {
    page: DomPage,
    config: SiteConfig,
    drawer: Option<SharedDrawer>,
    _toggle_click: Option<EventListenerGuard>,
    _popstate: EventListenerGuard,
}

impl MountedNavbar {
    /// Re-apply active-link state for `path`. Returns how many links are active.
    pub fn highlight(&self, path: &str) -> usize {
        navbar::highlight_links(&self.page, &self.config, path)
    }
}

/// Load the navbar into the configured mount point.
///
/// `Ok(None)` when the page has no mount element.
pub async fn mount_navbar(config: &SiteConfig) -> Result<Option<MountedNavbar>> {
    let document = document()?;
    let Some(mount) = document.get_element_by_id(&config.mount_id) else {
        tracing::debug!(mount = %config.mount_id, "no navbar mount on this page");
        return Ok(None);
    };

    let response = fetch_fragment(&config.fragment_url).await?;
    let page = DomPage { document, mount };
    let active = navbar::install_fragment(&page, config, response, &platform::current_path())?;

    let mounted = wire(page, config.clone())?;
    tracing::info!(active, drawer = mounted.drawer.is_some(), "navbar mounted");
    Ok(Some(mounted))
}

/// GET the fragment with same-origin credentials. Transport failures are
/// errors; any HTTP status is returned for the caller to judge.
async fn fetch_fragment(url: &str) -> Result<FragmentResponse> {
    let fetch_err = |reason: String| SiteError::FragmentFetch {
        url: url.to_string(),
        reason,
    };

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|err| fetch_err(describe_js(&err)))?;

    let response: Response = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|err| fetch_err(describe_js(&err)))?
        .dyn_into()
        .map_err(|_| fetch_err("fetch did not resolve to a Response".into()))?;

    let status = response.status();
    if !response.ok() {
        return Ok(FragmentResponse {
            status,
            body: String::new(),
        });
    }

    let body = response.text().map_err(|err| fetch_err(describe_js(&err)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|err| fetch_err(describe_js(&err)))?
        .as_string()
        .ok_or_else(|| fetch_err("body is not text".into()))?;
    Ok(FragmentResponse { status, body })
}

fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn wire(page: DomPage, config: SiteConfig) -> Result<MountedNavbar> {
    let toggle = query_html(&page.mount, &config.toggle_selector);
    let drawer_el = query_html(&page.mount, &config.drawer_selector);

    let (drawer, toggle_click) = match (toggle, drawer_el) {
        (Some(toggle), Some(drawer_el)) => {
            let drawer: SharedDrawer = Rc::new_cyclic(|handle| {
                RefCell::new(Drawer::new(DomDrawerView {
                    document: page.document.clone(),
                    toggle: toggle.clone(),
                    drawer: drawer_el,
                    handle: handle.clone(),
                }))
            });
            let weak = Rc::downgrade(&drawer);
            let click = EventListenerGuard::new(&toggle, "click", false, move |_event: Event| {
                if let Some(drawer) = weak.upgrade() {
                    if let Ok(mut drawer) = drawer.try_borrow_mut() {
                        drawer.toggle();
                    }
                }
            });
            (Some(drawer), Some(click))
        }
        (toggle, drawer_el) => {
            tracing::warn!(
                toggle = toggle.is_some(),
                drawer = drawer_el.is_some(),
                "navbar fragment lacks toggle or drawer; drawer disabled"
            );
            (None, None)
        }
    };

    let popstate = {
        let page = page.clone();
        let config = config.clone();
        EventListenerGuard::new(&window()?, "popstate", false, move |_event: Event| {
            navbar::highlight_links(&page, &config, &platform::current_path());
        })
    };

    Ok(MountedNavbar {
        page,
        config,
        drawer,
        _toggle_click: toggle_click,
        _popstate: popstate,
    })
}
