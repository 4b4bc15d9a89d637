//! 路由定义模块 - 领域模型
//!
//! 不依赖 DOM：路径解析、反向生成路径，以及每个路由的访问配置。

use charity_directory::guard::{ORG_DASHBOARD_PATH, RouteAccess, USER_DASHBOARD_PATH};
use charity_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Categories,
    Category(String),
    Organizations,
    Organization(i64),
    Search,
    AboutUs,
    Advertise,
    ListYourCharity,
    Contact,
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    HelpCenter,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    AuthCallback,
    OrganizationLogin,
    OrganizationSignup,
    Dashboard,
    OrganizationDashboard,
    Profile,
    SearchHistory,
    Bookmarks,
    NotificationSettings,
    Notifications,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（忽略查询串与末尾斜杠）
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["categories"] => Self::Categories,
            ["categories", slug] => Self::Category(slug.to_string()),
            ["organizations"] => Self::Organizations,
            // `/organizations/{id}` 或 `/organizations/{id}-{name-slug}`
            ["organizations", id] => id
                .split('-')
                .next()
                .and_then(|n| n.parse().ok())
                .map(Self::Organization)
                .unwrap_or(Self::NotFound),
            ["search"] => Self::Search,
            ["about-us"] => Self::AboutUs,
            ["advertise"] => Self::Advertise,
            ["list-your-charity"] => Self::ListYourCharity,
            ["contact"] => Self::Contact,
            ["privacy-policy"] => Self::PrivacyPolicy,
            ["terms-of-service"] => Self::TermsOfService,
            ["cookie-policy"] => Self::CookiePolicy,
            ["help-center"] => Self::HelpCenter,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["forgot-password"] => Self::ForgotPassword,
            ["reset-password"] => Self::ResetPassword,
            ["auth", "callback"] => Self::AuthCallback,
            ["organization-login"] => Self::OrganizationLogin,
            ["organization-signup"] => Self::OrganizationSignup,
            ["dashboard"] => Self::Dashboard,
            ["organization-dashboard"] => Self::OrganizationDashboard,
            ["profile"] => Self::Profile,
            ["search-history"] => Self::SearchHistory,
            ["bookmarks"] => Self::Bookmarks,
            ["notification-settings"] => Self::NotificationSettings,
            ["notifications"] => Self::Notifications,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Categories => "/categories".into(),
            Self::Category(slug) => format!("/categories/{}", slug),
            Self::Organizations => "/organizations".into(),
            Self::Organization(id) => format!("/organizations/{}", id),
            Self::Search => "/search".into(),
            Self::AboutUs => "/about-us".into(),
            Self::Advertise => "/advertise".into(),
            Self::ListYourCharity => "/list-your-charity".into(),
            Self::Contact => "/contact".into(),
            Self::PrivacyPolicy => "/privacy-policy".into(),
            Self::TermsOfService => "/terms-of-service".into(),
            Self::CookiePolicy => "/cookie-policy".into(),
            Self::HelpCenter => "/help-center".into(),
            Self::Login => "/login".into(),
            Self::Signup => "/signup".into(),
            Self::ForgotPassword => "/forgot-password".into(),
            Self::ResetPassword => "/reset-password".into(),
            Self::AuthCallback => "/auth/callback".into(),
            Self::OrganizationLogin => "/organization-login".into(),
            Self::OrganizationSignup => "/organization-signup".into(),
            Self::Dashboard => USER_DASHBOARD_PATH.into(),
            Self::OrganizationDashboard => ORG_DASHBOARD_PATH.into(),
            Self::Profile => "/profile".into(),
            Self::SearchHistory => "/search-history".into(),
            Self::Bookmarks => "/bookmarks".into(),
            Self::NotificationSettings => "/notification-settings".into(),
            Self::Notifications => "/notifications".into(),
            Self::NotFound => "/404".into(),
        }
    }

    /// **核心守卫配置：每个路由的访问要求**
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Login
            | Self::Signup
            | Self::ForgotPassword
            | Self::ResetPassword
            | Self::OrganizationLogin
            | Self::OrganizationSignup => RouteAccess::anonymous_only(),
            Self::Dashboard => RouteAccess::roles(&[Role::User, Role::PlatformAdmin]),
            Self::OrganizationDashboard => {
                RouteAccess::roles(&[Role::OrgAdmin]).with_redirect(USER_DASHBOARD_PATH)
            }
            Self::Profile
            | Self::SearchHistory
            | Self::Bookmarks
            | Self::NotificationSettings
            | Self::Notifications => RouteAccess::authenticated(),
            _ => RouteAccess::public(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dynamic_segments() {
        assert_eq!(
            AppRoute::from_path("/categories/health-medical"),
            AppRoute::Category("health-medical".into())
        );
        assert_eq!(AppRoute::from_path("/organizations/42/"), AppRoute::Organization(42));
        assert_eq!(
            AppRoute::from_path("/organizations/42-river-trust"),
            AppRoute::Organization(42)
        );
        assert_eq!(AppRoute::from_path("/organizations/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/search?q=food"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Category("education".into()),
            AppRoute::Organization(7),
            AppRoute::AuthCallback,
            AppRoute::NotificationSettings,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn protected_routes_require_auth() {
        assert!(AppRoute::Bookmarks.access().require_auth);
        assert!(AppRoute::Login.access().require_unauth);
        assert!(!AppRoute::Home.access().require_auth);
        assert_eq!(
            AppRoute::OrganizationDashboard.access().allowed_roles,
            vec![Role::OrgAdmin]
        );
    }
}
