//! Route normalization and the active-link predicate used by the navbar.
//!
//! A link is active when the current path is root and the link targets root,
//! or when the link targets a non-root path that the current path *ends with*.
//! This is a plain string suffix test, not a path-prefix test: `/blog/post-1`
//! highlights a `/post-1` link but not `/blog`, a `/shop` link lights up on the
//! unrelated `/my/shop`, and a relative `shop` link lights up on `/workshop`.

/// Strip trailing slashes; an empty result becomes `/`.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize a link target. Unlike [`normalize_path`] a missing or all-slash
/// target that trims to nothing stays empty, except that `/` itself stays root.
pub fn normalize_target(href: Option<&str>) -> String {
    match href {
        None => String::new(),
        Some(raw) => {
            let trimmed = raw.trim_end_matches('/');
            if trimmed.is_empty() && !raw.is_empty() {
                "/".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// The current page location, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(raw: &str) -> Self {
        Self(normalize_path(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Whether a link with the given (raw) `href` should be marked current.
    pub fn matches_link(&self, href: Option<&str>) -> bool {
        is_active_link(self.as_str(), &normalize_target(href))
    }
}

/// Active-link predicate over an already-normalized path and target.
pub fn is_active_link(path: &str, target: &str) -> bool {
    (path == "/" && target == "/") || (!target.is_empty() && target != "/" && path.ends_with(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(normalize_path("/blog///"), "/blog");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/about"), "/about");
    }

    #[test]
    fn nested_path_matches_by_suffix_only() {
        let path = RoutePath::new("/blog/post-1");
        assert!(path.matches_link(Some("/post-1/")));
        assert!(path.matches_link(Some("/blog/post-1")));
        assert!(!path.matches_link(Some("/blog")));
    }

    #[test]
    fn root_only_matches_root() {
        let root = RoutePath::new("/");
        assert!(root.matches_link(Some("/")));
        assert!(!root.matches_link(Some("/about")));

        let about = RoutePath::new("/about");
        assert!(!about.matches_link(Some("/")));
    }

    #[test]
    fn unrelated_link_is_inactive() {
        let path = RoutePath::new("/about");
        assert!(!path.matches_link(Some("/contact")));
    }

    #[test]
    fn empty_or_missing_target_never_matches() {
        let path = RoutePath::new("/about");
        assert!(!path.matches_link(None));
        assert!(!path.matches_link(Some("")));
        assert!(!RoutePath::new("/").matches_link(None));
    }

    #[test]
    fn suffix_looseness_is_preserved() {
        assert!(RoutePath::new("/my/shop").matches_link(Some("/shop")));
        assert!(RoutePath::new("/workshop").matches_link(Some("shop")));
        assert!(!RoutePath::new("/workshop").matches_link(Some("/shop")));
        assert!(RoutePath::new("/about/").matches_link(Some("about")));
    }

    #[test]
    fn predicate_matches_definition_over_a_grid() {
        let paths = ["/", "/blog", "/blog/post-1", "/about", "/contact/", ""];
        let targets = [None, Some(""), Some("/"), Some("/blog/"), Some("/contact"), Some("post-1")];
        for raw_path in paths {
            let p = normalize_path(raw_path);
            for href in targets {
                let t = normalize_target(href);
                let expected = (p == "/" && t == "/") || (!t.is_empty() && t != "/" && p.ends_with(&t));
                assert_eq!(
                    RoutePath::new(raw_path).matches_link(href),
                    expected,
                    "path={raw_path:?} href={href:?}"
                );
            }
        }
    }
}
