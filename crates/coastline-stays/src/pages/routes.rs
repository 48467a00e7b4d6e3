use serde::Serialize;

/// The fixed set of pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Properties,
    PropertyDetail,
    Discover,
    ContentDetail,
    Testimonials,
    About,
    Contact,
    PetFriendly,
    FishingGetaways,
    FamilyStays,
    WinterEscapes,
    NotFound,
}

impl PageKind {
    /// Canonical path for pages without a dynamic segment.
    pub const fn static_path(self) -> Option<&'static str> {
        match self {
            PageKind::Home => Some("/"),
            PageKind::Properties => Some("/properties"),
            PageKind::Discover => Some("/discover"),
            PageKind::Testimonials => Some("/testimonials"),
            PageKind::About => Some("/about"),
            PageKind::Contact => Some("/contact"),
            PageKind::PetFriendly => Some("/pet-friendly"),
            PageKind::FishingGetaways => Some("/fishing-getaways"),
            PageKind::FamilyStays => Some("/family-stays"),
            PageKind::WinterEscapes => Some("/winter-escapes"),
            PageKind::PropertyDetail | PageKind::ContentDetail | PageKind::NotFound => None,
        }
    }
}

/// Outcome of resolving a request path against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteMatch {
    Page {
        page: PageKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
    },
    Redirect {
        location: String,
        permanent: bool,
    },
}

struct RouteEntry {
    pattern: &'static str,
    page: PageKind,
}

struct RedirectEntry {
    prefix: &'static str,
    target: &'static str,
}

/// Declarative routing configuration: every URL path the site answers,
/// plus the legacy redirect and the catch-all not-found.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    redirects: Vec<RedirectEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    pub fn standard() -> Self {
        let entries = vec![
            RouteEntry { pattern: "/", page: PageKind::Home },
            RouteEntry { pattern: "/properties", page: PageKind::Properties },
            RouteEntry { pattern: "/properties/:slug", page: PageKind::PropertyDetail },
            RouteEntry { pattern: "/discover", page: PageKind::Discover },
            RouteEntry { pattern: "/discover/:slug", page: PageKind::ContentDetail },
            RouteEntry { pattern: "/testimonials", page: PageKind::Testimonials },
            RouteEntry { pattern: "/about", page: PageKind::About },
            RouteEntry { pattern: "/contact", page: PageKind::Contact },
            RouteEntry { pattern: "/pet-friendly", page: PageKind::PetFriendly },
            RouteEntry { pattern: "/fishing-getaways", page: PageKind::FishingGetaways },
            RouteEntry { pattern: "/family-stays", page: PageKind::FamilyStays },
            RouteEntry { pattern: "/winter-escapes", page: PageKind::WinterEscapes },
        ];

        // The blog moved under /discover; old links still circulate.
        let redirects = vec![RedirectEntry {
            prefix: "/blog",
            target: "/discover",
        }];

        Self { entries, redirects }
    }

    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = normalize(path);

        for redirect in &self.redirects {
            if path == redirect.prefix {
                return RouteMatch::Redirect {
                    location: redirect.target.to_string(),
                    permanent: true,
                };
            }
            if let Some(rest) = path.strip_prefix(redirect.prefix) {
                if rest.starts_with('/') {
                    return RouteMatch::Redirect {
                        location: format!("{}{}", redirect.target, rest),
                        permanent: true,
                    };
                }
            }
        }

        for entry in &self.entries {
            if let Some(slug) = match_pattern(entry.pattern, &path) {
                return RouteMatch::Page {
                    page: entry.page,
                    slug,
                };
            }
        }

        RouteMatch::Page {
            page: PageKind::NotFound,
            slug: None,
        }
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.split(['?', '#']).next().unwrap_or(path);
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Match a pattern like `/properties/:slug` against a concrete path,
/// returning the captured slug if the pattern has one.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    if pattern == "/" || !pattern.contains(':') {
        return if pattern == path { Some(None) } else { None };
    }

    let mut pattern_parts = pattern.trim_start_matches('/').split('/');
    let mut path_parts = path.trim_start_matches('/').split('/');
    let mut slug = None;

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (None, None) => return Some(slug),
            (Some(p), Some(actual)) if p.starts_with(':') => {
                if actual.is_empty() {
                    return None;
                }
                slug = Some(actual.to_string());
            }
            (Some(p), Some(actual)) if p == actual => {}
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_resolve_to_their_pages() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/properties"),
            RouteMatch::Page {
                page: PageKind::Properties,
                slug: None
            }
        );
        assert_eq!(
            table.resolve("/"),
            RouteMatch::Page {
                page: PageKind::Home,
                slug: None
            }
        );
    }

    #[test]
    fn dynamic_segments_capture_the_slug() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/discover/winter-wildlife"),
            RouteMatch::Page {
                page: PageKind::ContentDetail,
                slug: Some("winter-wildlife".to_string())
            }
        );
    }

    #[test]
    fn legacy_blog_paths_redirect_permanently() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/blog"),
            RouteMatch::Redirect {
                location: "/discover".to_string(),
                permanent: true
            }
        );
        assert_eq!(
            table.resolve("/blog/winter-wildlife"),
            RouteMatch::Redirect {
                location: "/discover/winter-wildlife".to_string(),
                permanent: true
            }
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/no-such-page"),
            RouteMatch::Page {
                page: PageKind::NotFound,
                slug: None
            }
        );
        assert_eq!(
            table.resolve("/properties/a/b"),
            RouteMatch::Page {
                page: PageKind::NotFound,
                slug: None
            }
        );
    }

    #[test]
    fn trailing_slashes_and_queries_are_normalized() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/contact/"),
            RouteMatch::Page {
                page: PageKind::Contact,
                slug: None
            }
        );
        assert_eq!(
            table.resolve("/discover?q=winter"),
            RouteMatch::Page {
                page: PageKind::Discover,
                slug: None
            }
        );
    }
}
