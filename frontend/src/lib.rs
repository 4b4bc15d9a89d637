//! 慈善机构目录前端应用
//!
//! 业务逻辑都在 `charity_directory` 核心库中，这里只负责浏览器适配与渲染：
//! - `web`: fetch / localStorage / 定时器 / 自定义事件 / History 路由
//! - `store`: 全局状态信号与 API 客户端上下文
//! - `auth`: 启动时的会话恢复与未读数轮询
//! - `components` / `pages`: UI 层

mod auth;
mod components {
    pub mod alerts;
    pub mod form;
    pub mod icons;
    pub mod location_selector;
    pub mod navbar;
    pub mod notification_indicator;
    pub mod organization_card;
    pub mod search_bar;
}
mod pages {
    pub mod account;
    pub mod auth;
    pub mod categories;
    pub mod dashboard;
    pub mod home;
    pub mod info;
    pub mod notifications;
    pub mod organizations;
    pub mod search;
}
mod panic_hook;
mod serde_helper;
mod store;

// 原生 Web API 封装模块
// 把浏览器能力接到核心库的 trait 上（HttpClient、TokenStore、Sleeper、LocationEventBus）。
pub(crate) mod web {
    mod events;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use events::{LocationListener, WindowEventBus};
    pub use http::FetchClient;
    pub use storage::BrowserStorage;
    pub use timer::{Interval, TimeoutSleeper};
}

pub use panic_hook::install as install_panic_hook;

use crate::auth::init_auth;
use crate::components::alerts::{ErrorAlert, NotificationToast};
use crate::components::navbar::{Footer, Navbar};
use crate::pages::{account, auth as auth_pages, categories, dashboard, home, info, notifications};
use crate::pages::{organizations, search};
use crate::store::provide_app_context;

use leptos::prelude::*;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <home::HomePage /> }.into_any(),
        AppRoute::Categories => view! { <categories::CategoriesPage /> }.into_any(),
        AppRoute::Category(slug) => view! { <categories::CategoryDetailPage slug=slug /> }.into_any(),
        AppRoute::Organizations => view! { <organizations::OrganizationsPage /> }.into_any(),
        AppRoute::Organization(id) => {
            view! { <organizations::OrganizationDetailPage id=id /> }.into_any()
        }
        AppRoute::Search => view! { <search::SearchPage /> }.into_any(),
        AppRoute::AboutUs => view! { <info::AboutUsPage /> }.into_any(),
        AppRoute::Advertise => view! { <info::AdvertisePage /> }.into_any(),
        AppRoute::ListYourCharity => view! { <info::ListYourCharityPage /> }.into_any(),
        AppRoute::Contact => view! { <info::ContactPage /> }.into_any(),
        AppRoute::PrivacyPolicy => view! { <info::PrivacyPolicyPage /> }.into_any(),
        AppRoute::TermsOfService => view! { <info::TermsOfServicePage /> }.into_any(),
        AppRoute::CookiePolicy => view! { <info::CookiePolicyPage /> }.into_any(),
        AppRoute::HelpCenter => view! { <info::HelpCenterPage /> }.into_any(),
        AppRoute::Login => view! { <auth_pages::LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <auth_pages::SignupPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <auth_pages::ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <auth_pages::ResetPasswordPage /> }.into_any(),
        AppRoute::AuthCallback => view! { <auth_pages::OAuthCallbackPage /> }.into_any(),
        AppRoute::OrganizationLogin => view! { <auth_pages::OrganizationLoginPage /> }.into_any(),
        AppRoute::OrganizationSignup => view! { <auth_pages::OrganizationSignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <dashboard::DashboardPage /> }.into_any(),
        AppRoute::OrganizationDashboard => {
            view! { <dashboard::OrganizationDashboardPage /> }.into_any()
        }
        AppRoute::Profile => view! { <account::ProfilePage /> }.into_any(),
        AppRoute::SearchHistory => view! { <account::SearchHistoryPage /> }.into_any(),
        AppRoute::Bookmarks => view! { <account::BookmarksPage /> }.into_any(),
        AppRoute::NotificationSettings => {
            view! { <notifications::NotificationSettingsPage /> }.into_any()
        }
        AppRoute::Notifications => view! { <notifications::NotificationsPage /> }.into_any(),
        AppRoute::NotFound => view! { <info::NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. API 客户端与全局状态放入上下文
    let (api, store) = provide_app_context();

    // 2. 恢复会话（完成前受保护路由显示加载状态）
    init_auth(api, store);

    view! {
        // 3. 会话信号注入路由服务，实现守卫
        <Router session=store.session()>
            <div class="min-h-screen flex flex-col bg-base-200">
                <Navbar />
                <div class="max-w-7xl w-full mx-auto px-4 pt-2">
                    <ErrorAlert />
                </div>
                <NotificationToast />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
