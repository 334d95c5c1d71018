use dioxus::prelude::*;

use crate::components::use_language;
use crate::t;

pub struct PostSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const POSTS: &[PostSummary] = &[
    PostSummary {
        slug: "post-1",
        title: "Five signs your funnel is leaking",
        summary: "Where prospects drop off, and the cheap fixes that win them back.",
    },
    PostSummary {
        slug: "positioning-basics",
        title: "Positioning before promotion",
        summary: "Why the clearest message beats the loudest campaign.",
    },
];

#[component]
pub fn Blog() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-blog",
            h1 { {t!("blog-title")} }
            ul { class: "page-blog__posts",
                for post in POSTS {
                    li { key: "{post.slug}",
                        a { href: "/blog/{post.slug}", "{post.title}" }
                        p { "{post.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    let _lang = use_language();
    let post = POSTS.iter().find(|p| p.slug == slug);

    rsx! {
        article { class: "page page-post",
            {match post {
                Some(post) => rsx! {
                    h1 { "{post.title}" }
                    p { "{post.summary}" }
                },
                None => rsx! {
                    h1 { {t!("blog-missing")} }
                },
            }}
            a { href: "/blog", {t!("blog-back")} }
        }
    }
}
