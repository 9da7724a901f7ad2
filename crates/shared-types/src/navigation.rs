use crate::role::Role;

/// Destinations reachable from the portal sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Dashboard,
    Logbook,
    Internships,
    Students,
    Publications,
    Analytics,
    Reports,
    Profile,
    Settings,
}

impl NavTarget {
    fn segment(&self) -> &'static str {
        match self {
            NavTarget::Dashboard => "dashboard",
            NavTarget::Logbook => "logbook",
            NavTarget::Internships => "internships",
            NavTarget::Students => "students",
            NavTarget::Publications => "publications",
            NavTarget::Analytics => "analytics",
            NavTarget::Reports => "reports",
            NavTarget::Profile => "profile",
            NavTarget::Settings => "settings",
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub target: NavTarget,
    pub label: &'static str,
    pub href: String,
}

impl NavItem {
    fn portal(role: Role, target: NavTarget, label: &'static str) -> Self {
        Self {
            target,
            label,
            href: format!("/{}/{}", role.as_str(), target.segment()),
        }
    }
}

/// Role-specific sidebar entries, in display order.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let entries: &[(NavTarget, &'static str)] = match role {
        Role::Student => &[
            (NavTarget::Dashboard, "Dashboard"),
            (NavTarget::Logbook, "Logbook"),
            (NavTarget::Internships, "Internships"),
            (NavTarget::Profile, "Profile"),
        ],
        Role::Teacher => &[
            (NavTarget::Dashboard, "Dashboard"),
            (NavTarget::Students, "My Students"),
            (NavTarget::Publications, "Publications"),
            (NavTarget::Profile, "Profile"),
        ],
        Role::Institution => &[
            (NavTarget::Dashboard, "Dashboard"),
            (NavTarget::Analytics, "Analytics"),
            (NavTarget::Reports, "Reports"),
            (NavTarget::Profile, "Profile"),
        ],
    };
    entries
        .iter()
        .map(|(target, label)| NavItem::portal(role, *target, label))
        .collect()
}

/// Entries shown under "General" for every role.
pub fn common_items() -> Vec<NavItem> {
    vec![NavItem {
        target: NavTarget::Settings,
        label: "Settings",
        href: "/settings".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        nav_items(role).iter().map(|i| i.label).collect()
    }

    #[test]
    fn student_items() {
        assert_eq!(
            labels(Role::Student),
            vec!["Dashboard", "Logbook", "Internships", "Profile"]
        );
    }

    #[test]
    fn teacher_items() {
        assert_eq!(
            labels(Role::Teacher),
            vec!["Dashboard", "My Students", "Publications", "Profile"]
        );
    }

    #[test]
    fn institution_items() {
        assert_eq!(
            labels(Role::Institution),
            vec!["Dashboard", "Analytics", "Reports", "Profile"]
        );
    }

    #[test]
    fn every_role_starts_with_its_dashboard() {
        for role in Role::ALL {
            let first = &nav_items(role)[0];
            assert_eq!(first.target, NavTarget::Dashboard);
            assert_eq!(first.href, role.dashboard_path());
        }
    }

    #[test]
    fn hrefs_are_scoped_to_the_role() {
        for role in Role::ALL {
            let prefix = format!("/{}/", role.as_str());
            assert!(nav_items(role).iter().all(|i| i.href.starts_with(&prefix)));
        }
    }

    #[test]
    fn settings_is_common() {
        let items = common_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href, "/settings");
    }
}
