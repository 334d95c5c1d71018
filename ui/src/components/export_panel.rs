use dioxus::prelude::*;

use super::{use_language, Notice};
use crate::core::config::SiteConfig;
use crate::leads::{self, Delivery, LeadList, ListStatus, ALL_LISTS, LEADS};
use crate::t;

fn list_label(list: &LeadList) -> String {
    if list == &LEADS {
        t!("export-leads")
    } else {
        t!("export-subscribers")
    }
}

/// Row counts and a download button for every local lead list.
#[component]
pub fn LeadExportPanel() -> Element {
    let _lang = use_language();
    let config = use_context::<SiteConfig>();
    let status = use_signal(|| Option::<Notice>::None);

    let lists: Vec<(LeadList, ListStatus)> = match leads::platform_ledger(&config) {
        Ok(ledger) => ALL_LISTS
            .iter()
            .map(|list| {
                let status = ledger.status(list).unwrap_or_else(|err| {
                    tracing::warn!("reading {} failed: {err}", list.file_name);
                    ListStatus::default()
                });
                (*list, status)
            })
            .collect(),
        Err(err) => {
            tracing::warn!("lead storage unavailable: {err}");
            ALL_LISTS.iter().map(|list| (*list, ListStatus::default())).collect()
        }
    };

    rsx! {
        section { class: "export-panel",
            h2 { {t!("export-title")} }
            p { {t!("export-intro")} }
            ul { class: "export-panel__lists",
                for (list, stored) in lists {
                    ExportRow { key: "{list.file_name}", list, stored, status }
                }
            }
            if let Some(notice) = status() {
                p { class: notice.class(), role: "status", {notice.message().to_string()} }
            }
        }
    }
}

#[component]
fn ExportRow(list: LeadList, stored: ListStatus, status: Signal<Option<Notice>>) -> Element {
    let config = use_context::<SiteConfig>();
    let label = list_label(&list);
    let count_text = match stored.records {
        Some(count) => t!("export-count", count = count),
        None => t!("export-count-unknown"),
    };
    let mut status = status;

    let ondownload = move |_| {
        let outcome =
            leads::platform_ledger(&config).and_then(|ledger| leads::download_list(&ledger, &list));
        let notice = match outcome {
            Ok(Some(Delivery::Browser)) => Notice::Success(t!("export-done", file = list.file_name)),
            Ok(Some(Delivery::Saved(path))) => Notice::Success(t!("export-saved", path = path)),
            Ok(None) => Notice::Error(t!("export-empty")),
            Err(err) => {
                tracing::error!("export of {} failed: {err}", list.file_name);
                Notice::Error(t!("export-failed"))
            }
        };
        status.set(Some(notice));
    };

    rsx! {
        li { class: "export-panel__row",
            span { class: "export-panel__label", "{label}" }
            span { class: "export-panel__count", "{count_text}" }
            button {
                r#type: "button",
                class: "button",
                disabled: !stored.exportable,
                onclick: ondownload,
                {t!("export-download")}
            }
        }
    }
}
