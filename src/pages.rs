//! Page Table
//!
//! Route → components mounted on that page, resolved once at startup.

use crate::resources::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageComponent {
    Dashboard,
    Binder(ResourceKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDescriptor {
    pub route: &'static str,
    pub title: &'static str,
    pub components: &'static [PageComponent],
}

pub static PAGES: &[PageDescriptor] = &[
    PageDescriptor {
        route: "/",
        title: "Painel",
        components: &[PageComponent::Dashboard],
    },
    PageDescriptor {
        route: "/profissionais",
        title: "Profissionais",
        components: &[PageComponent::Binder(ResourceKind::Professionals)],
    },
    PageDescriptor {
        route: "/plantoes",
        title: "Plantões",
        components: &[PageComponent::Binder(ResourceKind::Shifts)],
    },
    PageDescriptor {
        route: "/escalas",
        title: "Escalas",
        components: &[PageComponent::Binder(ResourceKind::Schedules)],
    },
    PageDescriptor {
        route: "/usuarios",
        title: "Funcionários",
        components: &[PageComponent::Binder(ResourceKind::Employees)],
    },
];

/// `/` matches only itself; other routes also match their sub-paths.
pub fn resolve(path: &str) -> Option<&'static PageDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return PAGES.iter().find(|p| p.route == "/");
    }
    PAGES.iter().filter(|p| p.route != "/").find(|p| {
        trimmed == p.route
            || trimmed
                .strip_prefix(p.route)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_dashboard_only() {
        let page = resolve("/").unwrap();
        assert_eq!(page.components, &[PageComponent::Dashboard]);
        assert_eq!(resolve("").unwrap().route, "/");
    }

    #[test]
    fn test_resource_routes() {
        assert_eq!(
            resolve("/plantoes/").unwrap().components,
            &[PageComponent::Binder(ResourceKind::Shifts)]
        );
        assert_eq!(resolve("/escalas/hoje").unwrap().title, "Escalas");
        assert_eq!(resolve("/usuarios?x=1").unwrap().route, "/usuarios");
    }

    #[test]
    fn test_unknown_routes() {
        assert!(resolve("/auditoria").is_none());
        // prefix of another word is not a match
        assert!(resolve("/plantoesx").is_none());
    }
}
