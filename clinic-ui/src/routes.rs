//! Path-based page routing.

/// Pages reachable from the side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Visits,
    Search,
    NotFound,
}

impl Route {
    /// `/` and `/home` are the same page; trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/home" => Route::Home,
            "/visits" => Route::Visits,
            "/search" => Route::Search,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Visits => "/visits",
            Route::Search => "/search",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Главная",
            Route::Visits => "Приемы для врачей",
            Route::Search => "Поиск пациента",
            Route::NotFound => "Страница не найдена",
        }
    }
}

/// Entry of the side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// Sections of the clinic menu. Paths without a page resolve to [`Route::NotFound`].
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "home", label: "Главная", path: "/" },
    NavItem { key: "search", label: "Поиск пациента", path: "/search" },
    NavItem { key: "visits", label: "Приемы", path: "/visits" },
    NavItem { key: "costs", label: "Расходы", path: "/costs" },
    NavItem { key: "doctors", label: "Сотрудники", path: "/doctors" },
    NavItem { key: "products", label: "Товары", path: "/products" },
    NavItem { key: "sales", label: "Продажи товаров", path: "/sales" },
    NavItem { key: "warehouse", label: "Склад", path: "/warehouse" },
    NavItem { key: "blacklist", label: "Черный список", path: "/blacklist" },
    NavItem { key: "diagnostics", label: "Анализы", path: "/diagnostics" },
    NavItem { key: "about", label: "О нас", path: "/about" },
];

/// Menu key highlighted for `path`: the longest matching nav prefix, `home` otherwise.
pub fn active_nav_key(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .filter(|item| item.path != "/")
        .filter(|item| path == item.path || path.starts_with(&format!("{}/", item.path)))
        .max_by_key(|item| item.path.len())
        .map(|item| item.key)
        .unwrap_or("home")
}

/// Search page address for an already encoded query string.
pub fn search_href(encoded_search: &str) -> String {
    let encoded_search = encoded_search.trim_start_matches('?');
    if encoded_search.is_empty() {
        Route::Search.path().to_string()
    } else {
        format!("{}?{encoded_search}", Route::Search.path())
    }
}

/// Splits an in-app href into its path and its query string (with the leading `?`).
pub fn split_href(href: &str) -> (&str, &str) {
    let without_fragment = href.split('#').next().unwrap_or_default();
    match without_fragment.find('?') {
        Some(at) => without_fragment.split_at(at),
        None => (without_fragment, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_splits_into_path_and_query() {
        assert_eq!(split_href("/search?q=b"), ("/search", "?q=b"));
        assert_eq!(split_href("/visits"), ("/visits", ""));
        assert_eq!(split_href("/search?q=a#top"), ("/search", "?q=a"));
        let href = search_href("q=%D0%B0");
        let (path, search) = split_href(&href);
        assert_eq!(Route::from_path(path), Route::Search);
        assert_eq!(search, "?q=%D0%B0");
    }

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/home/"), Route::Home);
        assert_eq!(Route::from_path("/visits"), Route::Visits);
        assert_eq!(Route::from_path("/search"), Route::Search);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/costs"), Route::NotFound);
        assert_eq!(Route::from_path("/visits/12"), Route::NotFound);
    }

    #[test]
    fn nav_highlight_follows_prefix() {
        assert_eq!(active_nav_key("/"), "home");
        assert_eq!(active_nav_key("/search"), "search");
        assert_eq!(active_nav_key("/visits/today"), "visits");
        assert_eq!(active_nav_key("/unknown"), "home");
    }

    #[test]
    fn search_href_omits_empty_query() {
        assert_eq!(search_href(""), "/search");
        assert_eq!(search_href("q=P-1"), "/search?q=P-1");
        assert_eq!(search_href("?q=1"), "/search?q=1");
    }
}
