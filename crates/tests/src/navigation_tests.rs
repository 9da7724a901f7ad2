use pretty_assertions::assert_eq;
use shared_types::{common_items, nav_items, NavTarget, Role};

#[test]
fn every_portal_starts_with_dashboard_and_ends_with_profile() {
    for role in Role::ALL {
        let items = nav_items(role);
        assert_eq!(items.first().map(|i| i.target), Some(NavTarget::Dashboard));
        assert_eq!(items.last().map(|i| i.target), Some(NavTarget::Profile));
        assert_eq!(items[0].href, role.dashboard_path());
    }
}

#[test]
fn portal_links_stay_inside_the_role_prefix() {
    for role in Role::ALL {
        let prefix = format!("/{}/", role.as_str());
        for item in nav_items(role) {
            assert!(item.href.starts_with(&prefix), "{} escapes {}", item.href, prefix);
        }
    }
}

#[test]
fn settings_is_shared_by_every_role() {
    let common = common_items();
    assert_eq!(common.len(), 1);
    assert_eq!(common[0].href, "/settings");
    for role in Role::ALL {
        assert!(nav_items(role).iter().all(|i| i.target != NavTarget::Settings));
    }
}
