//! Translation completeness: every `t!("...")` key used in `src/` exists in the
//! fallback locale, and every other locale defines every fallback key.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "sitekit-ui.ftl";
const I18N_DIR: &str = "i18n";

/// Message ids of a Fluent file. Comments, terms, attributes and variant lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn duplicate_keys(content: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut dups = Vec::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) && !seen.insert(id.to_string()) {
                dups.push(id.to_string());
            }
        }
    }
    dups
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!("...")` in every `.rs` file under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = "t!(\"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("fallback FTL file is readable");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(!fallback_keys.is_empty(), "no keys parsed from {fallback_file:?}");
    assert!(
        duplicate_keys(&fallback_content).is_empty(),
        "duplicate keys in en-US: {:?}",
        duplicate_keys(&fallback_content)
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("lead-form-thanks"));
    let missing: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from en-US:\n{}",
        missing.join("\n")
    );

    let mut per_locale: HashMap<String, Vec<String>> = HashMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} lacks {FTL_FILENAME}"));
        assert!(
            duplicate_keys(&content).is_empty(),
            "duplicate keys in {locale}"
        );
        let keys = parse_ftl_keys(&content);
        let missing: Vec<String> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale.insert(locale, missing);
        }
    }

    assert!(
        per_locale.is_empty(),
        "locales missing translations relative to en-US: {per_locale:#?}"
    );
}

#[test]
fn fallback_and_spanish_locales_ship() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    assert_eq!(locale_dirs(&i18n_root), vec!["en-US", "es-ES"]);
}
