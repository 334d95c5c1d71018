use dioxus::prelude::*;

use crate::core::config::SiteConfig;

/// Mount point for the shared navbar fragment.
///
/// The fragment is fetched and injected after the first render; its markup is
/// owned by the DOM adapter, not by this component. `path` is the router's
/// current path and re-runs link highlighting whenever it changes.
#[component]
pub fn SiteNavbar(path: String) -> Element {
    let config = use_context::<SiteConfig>();
    let mount_id = config.mount_id.clone();

    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;

        use crate::core::navbar::settle_mount;
        use crate::dom::navbar::{mount_navbar, MountedNavbar};

        let mut mounted = use_signal(|| Option::<Rc<MountedNavbar>>::None);

        use_effect(move || {
            let config = config.clone();
            spawn(async move {
                if let Some(navbar) = settle_mount(mount_navbar(&config).await) {
                    mounted.set(Some(Rc::new(navbar)));
                }
            });
        });

        use_effect(use_reactive((&path,), move |(path,)| {
            if let Some(navbar) = mounted.read().as_ref() {
                navbar.highlight(&path);
            }
        }));
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&config, &path);

    rsx! {
        div { id: "{mount_id}", class: "site-navbar" }
    }
}
