pub mod home;
pub mod institution;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod settings;
pub mod student;
pub mod teacher;

use crate::auth::use_auth;
use crate::notify;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdSearch,
    LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    catalog, common_items, evaluate, mark_all_read, mark_read, nav_items, relative_time,
    unread_count, Access, FeatureFlags, GuardDecision, NavTarget, Notification, PortalSettings,
    Role, Transition,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, Toasts, UserAvatar,
};

use home::Home;
use institution::{InstitutionAnalytics, InstitutionDashboard, InstitutionReports};
use login::Login;
use not_found::NotFound;
use profile::{InstitutionProfile, StudentProfile, TeacherProfile};
use settings::Settings;
use student::{StudentDashboard, StudentInternships, StudentLogbook};
use teacher::{
    TeacherDashboard, TeacherPublications, TeacherStudentDetail, TeacherStudentLogbook,
    TeacherStudents,
};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(PortalGuard)]
    #[layout(PortalLayout)]
    // ── Student ──
    #[route("/student/dashboard")]
    StudentDashboard {},
    #[route("/student/logbook")]
    StudentLogbook {},
    #[route("/student/internships")]
    StudentInternships {},
    #[route("/student/profile")]
    StudentProfile {},
    // ── Teacher ──
    #[route("/teacher/dashboard")]
    TeacherDashboard {},
    #[route("/teacher/students")]
    TeacherStudents {},
    #[route("/teacher/students/:id")]
    TeacherStudentDetail { id: String },
    #[route("/teacher/students/:id/logbook")]
    TeacherStudentLogbook { id: String },
    #[route("/teacher/publications")]
    TeacherPublications {},
    #[route("/teacher/profile")]
    TeacherProfile {},
    // ── Institution ──
    #[route("/institution/dashboard")]
    InstitutionDashboard {},
    #[route("/institution/analytics")]
    InstitutionAnalytics {},
    #[route("/institution/reports")]
    InstitutionReports {},
    #[route("/institution/profile")]
    InstitutionProfile {},
    // ── Any signed-in role ──
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Who may open this route.
    pub fn access(&self) -> Access {
        match self {
            Route::Home {} | Route::Login {} | Route::NotFound { .. } => Access::Public,
            // Profile pages show the signed-in user's own record, whatever
            // the role prefix in the path.
            Route::Settings {}
            | Route::StudentProfile {}
            | Route::TeacherProfile {}
            | Route::InstitutionProfile {} => Access::Authenticated,
            Route::StudentDashboard {}
            | Route::StudentLogbook {}
            | Route::StudentInternships {} => Access::Role(Role::Student),
            Route::TeacherDashboard {}
            | Route::TeacherStudents {}
            | Route::TeacherStudentDetail { .. }
            | Route::TeacherStudentLogbook { .. }
            | Route::TeacherPublications {} => Access::Role(Role::Teacher),
            Route::InstitutionDashboard {}
            | Route::InstitutionAnalytics {}
            | Route::InstitutionReports {} => Access::Role(Role::Institution),
        }
    }

    pub fn dashboard(role: Role) -> Route {
        match role {
            Role::Student => Route::StudentDashboard {},
            Role::Teacher => Route::TeacherDashboard {},
            Role::Institution => Route::InstitutionDashboard {},
        }
    }

    /// Route behind a sidebar entry. Destinations a role has no page for fall
    /// back to its dashboard.
    pub fn for_nav(role: Role, target: NavTarget) -> Route {
        match (role, target) {
            (_, NavTarget::Settings) => Route::Settings {},
            (Role::Student, NavTarget::Logbook) => Route::StudentLogbook {},
            (Role::Student, NavTarget::Internships) => Route::StudentInternships {},
            (Role::Student, NavTarget::Profile) => Route::StudentProfile {},
            (Role::Teacher, NavTarget::Students) => Route::TeacherStudents {},
            (Role::Teacher, NavTarget::Publications) => Route::TeacherPublications {},
            (Role::Teacher, NavTarget::Profile) => Route::TeacherProfile {},
            (Role::Institution, NavTarget::Analytics) => Route::InstitutionAnalytics {},
            (Role::Institution, NavTarget::Reports) => Route::InstitutionReports {},
            (Role::Institution, NavTarget::Profile) => Route::InstitutionProfile {},
            (role, _) => Route::dashboard(role),
        }
    }

    /// Sidebar entry highlighted while this route is open.
    pub fn nav_target(&self) -> Option<NavTarget> {
        match self {
            Route::StudentDashboard {}
            | Route::TeacherDashboard {}
            | Route::InstitutionDashboard {} => Some(NavTarget::Dashboard),
            Route::StudentLogbook {} => Some(NavTarget::Logbook),
            Route::StudentInternships {} => Some(NavTarget::Internships),
            Route::TeacherStudents {}
            | Route::TeacherStudentDetail { .. }
            | Route::TeacherStudentLogbook { .. } => Some(NavTarget::Students),
            Route::TeacherPublications {} => Some(NavTarget::Publications),
            Route::InstitutionAnalytics {} => Some(NavTarget::Analytics),
            Route::InstitutionReports {} => Some(NavTarget::Reports),
            Route::StudentProfile {} | Route::TeacherProfile {} | Route::InstitutionProfile {} => {
                Some(NavTarget::Profile)
            }
            Route::Settings {} => Some(NavTarget::Settings),
            Route::Home {} | Route::Login {} | Route::NotFound { .. } => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::StudentDashboard {}
            | Route::TeacherDashboard {}
            | Route::InstitutionDashboard {} => "Dashboard",
            Route::StudentLogbook {} => "Logbook",
            Route::StudentInternships {} => "Internships",
            Route::TeacherStudents {} => "My Students",
            Route::TeacherStudentDetail { .. } => "Student Details",
            Route::TeacherStudentLogbook { .. } => "Student Logbook",
            Route::TeacherPublications {} => "Publications",
            Route::InstitutionAnalytics {} => "Analytics",
            Route::InstitutionReports {} => "Reports",
            Route::StudentProfile {} | Route::TeacherProfile {} | Route::InstitutionProfile {} => {
                "Profile"
            }
            Route::Settings {} => "Settings",
            Route::Home {} => "Home",
            Route::Login {} => "Sign In",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Route a guard decision sends the user to, if any.
pub fn redirect_route(decision: GuardDecision) -> Option<Route> {
    match decision {
        GuardDecision::Allow => None,
        GuardDecision::RedirectToLogin => Some(Route::Login {}),
        GuardDecision::RedirectToDashboard(role) => Some(Route::dashboard(role)),
    }
}

/// Navigate to an app path produced by a session transition.
pub fn go_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "unknown navigation target");
            navigator().push(Route::Home {});
        }
    }
}

/// Show a transition's notice and follow its navigation.
pub fn follow(transition: Transition, toast: Toasts) {
    notify::show(toast, &transition.notice);
    go_to(&transition.navigate_to);
}

/// Route guard layout: redirects to the login page or the user's own
/// dashboard before anything behind it renders.
#[component]
fn PortalGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    let session = auth.current();
    let decision = evaluate(session.as_ref(), route.access());

    match redirect_route(decision) {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            tracing::info!(from = %route, to = %target, "route guard redirect");
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

fn nav_icon(target: NavTarget) -> Element {
    match target {
        NavTarget::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavTarget::Logbook => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavTarget::Internships => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavTarget::Students => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavTarget::Publications => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavTarget::Analytics => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        NavTarget::Reports => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavTarget::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavTarget::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Portal shell with sidebar and top navbar.
#[component]
fn PortalLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let portal: PortalSettings = use_context();
    let mut auth = use_auth();
    let toast = use_toast();

    let Some(session) = auth.current() else {
        return rsx! {};
    };
    let role = session.role;
    let active = route.nav_target();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "{portal.institution_code}" }
                        span { class: "sidebar-brand-portal", "{role.portal_label()}" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup { label: "Menu".to_string(),
                        for item in nav_items(role) {
                            SidebarMenuItem { key: "{item.href}",
                                Link { to: Route::for_nav(role, item.target),
                                    SidebarMenuButton { active: active == Some(item.target),
                                        {nav_icon(item.target)}
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                    SidebarSeparator {}
                    SidebarGroup {
                        for item in common_items() {
                            SidebarMenuItem { key: "{item.href}",
                                Link { to: Route::for_nav(role, item.target),
                                    SidebarMenuButton { active: active == Some(item.target),
                                        {nav_icon(item.target)}
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-user",
                        UserAvatar { src: Some(session.avatar.clone()), initials: session.initials() }
                        div { class: "sidebar-footer-text",
                            span { class: "sidebar-footer-name", "{session.display_name}" }
                            span { class: "sidebar-footer-role", "{role.display_name()}" }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }

                    Separator { horizontal: false }

                    span { class: "navbar-title", "{route.title()}" }

                    div { class: "navbar-spacer" }

                    if flags.notifications {
                        NotificationBell {}
                    }

                    DropdownMenu {
                        DropdownMenuTrigger {
                            UserAvatar { src: Some(session.avatar.clone()), initials: session.initials() }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel { "{session.display_name}" }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "profile".to_string(),
                                index: 0usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::for_nav(role, NavTarget::Profile));
                                },
                                "Profile"
                            }
                            DropdownMenuItem::<String> {
                                value: "settings".to_string(),
                                index: 1usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::Settings {});
                                },
                                "Settings"
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 2usize,
                                on_select: move |_: String| {
                                    let transition = auth.logout();
                                    follow(transition, toast);
                                },
                                "Log out"
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Bell in the top bar with the unread count and a dropdown of recent
/// notifications. Read state is local to the open portal.
#[component]
fn NotificationBell() -> Element {
    let mut notifications = use_signal(|| {
        catalog()
            .map(|f| f.notifications.clone())
            .unwrap_or_default()
    });

    let unread = unread_count(&notifications.read());
    let now = Utc::now();
    let items: Vec<Notification> = notifications.read().clone();
    let mark_all_index = items.len() + 1;

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                span { class: "notification-bell", "aria-label": "Notifications",
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                    if unread > 0 {
                        span { class: "notification-count", "{unread}" }
                    }
                }
            }
            DropdownMenuContent {
                DropdownMenuLabel {
                    div { class: "notification-header",
                        span { "Notifications" }
                        if unread > 0 {
                            Badge { variant: BadgeVariant::Secondary, "{unread} new" }
                        }
                    }
                }
                DropdownMenuSeparator {}
                if items.is_empty() {
                    div { class: "notification-empty", "You're all caught up." }
                }
                for (index, item) in items.into_iter().enumerate() {
                    DropdownMenuItem::<String> {
                        key: "{item.id}",
                        value: item.id.to_string(),
                        index: index + 1,
                        on_select: move |_: String| {
                            mark_read(&mut notifications.write(), item.id);
                        },
                        div {
                            class: "notification-item",
                            "data-read": if item.read { "true" } else { "false" },
                            span { class: "notification-title", "{item.title}" }
                            span { class: "notification-description", "{item.description}" }
                            span { class: "notification-time", {relative_time(item.timestamp, now)} }
                        }
                    }
                }
                if unread > 0 {
                    DropdownMenuSeparator {}
                    DropdownMenuItem::<String> {
                        value: "mark-all".to_string(),
                        index: mark_all_index,
                        on_select: move |_: String| {
                            mark_all_read(&mut notifications.write());
                        },
                        "Mark all as read"
                    }
                }
            }
        }
    }
}
