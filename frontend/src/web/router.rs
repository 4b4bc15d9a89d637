//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程：监听 -> 守卫（核心库 `guard::evaluate`）-> 处理 -> 加载。

use charity_directory::guard::{self, GuardDecision, RouteAccess};
use charity_shared::Role;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 守卫所需的会话视图（由认证上下文注入）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    /// 启动时的会话恢复是否已完成
    pub ready: bool,
}

/// 当前地址：路径 + 查询串
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    fn current() -> Self {
        let location = web_sys::window().map(|w| w.location());
        Self {
            path: location
                .as_ref()
                .and_then(|l| l.pathname().ok())
                .unwrap_or_else(|| "/".to_string()),
            search: location
                .as_ref()
                .and_then(|l| l.search().ok())
                .unwrap_or_default(),
        }
    }

    fn parse(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                search: format!("?{}", query),
            },
            None => Self {
                path: target.to_string(),
                search: String::new(),
            },
        }
    }

    /// 读取查询参数（已解码）
    pub fn query(&self, key: &str) -> Option<String> {
        self.search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| {
                js_sys::decode_uri_component(&v.replace('+', " "))
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or_else(|| v.to_string())
            })
    }
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 整页跳转到外部地址（OAuth 提供方）
pub fn assign_location(url: &str) -> Result<(), String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_string())?
        .location()
        .assign(url)
        .map_err(|e| format!("{:?}", e))
}

/// 路由器服务
///
/// 当前位置保存在信号中；会话信号由外部注入，与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    location: RwSignal<Location>,
    session: Signal<SessionView>,
}

impl RouterService {
    fn new(session: Signal<SessionView>) -> Self {
        Self {
            location: RwSignal::new(Location::current()),
            session,
        }
    }

    pub fn location(&self) -> ReadSignal<Location> {
        self.location.read_only()
    }

    pub fn current_route(&self) -> Memo<AppRoute> {
        let location = self.location;
        Memo::new(move |_| AppRoute::from_path(&location.with(|l| l.path.clone())))
    }

    /// 导航到站内地址（可带查询串）
    pub fn navigate(&self, target: &str) {
        push_history_state(target);
        self.location.set(Location::parse(target));
    }

    /// 替换当前历史记录（用于重定向）
    pub fn replace(&self, target: &str) {
        replace_history_state(target);
        self.location.set(Location::parse(target));
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let location = self.location;
        let closure = Closure::<dyn Fn()>::new(move || location.set(Location::current()));

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同生命周期
        closure.forget();
    }

    /// 位置或会话变化时执行守卫
    fn setup_guard(&self) {
        let router = *self;
        Effect::new(move |_| {
            let session = router.session.get();
            let location = router.location.get();
            if !session.ready {
                return;
            }
            let route = AppRoute::from_path(&location.path);
            let decision = guard::evaluate(
                &route.access(),
                session.is_authenticated,
                session.role,
                &location.path,
            );
            if let GuardDecision::Redirect(target) = decision {
                router.replace(&target);
            }
        });
    }
}

fn provide_router(session: Signal<SessionView>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_guard();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| router.navigate(to)
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(session: Signal<SessionView>, children: Children) -> impl IntoView {
    provide_router(session);
    children()
}

/// 路由出口：会话恢复完成前显示加载状态，之后按当前路由渲染
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let route = router.current_route();
    let session = router.session;

    move || {
        if !session.get().ready && route.get().access() != RouteAccess::public() {
            return view! {
                <div class="flex items-center justify-center min-h-[50vh]">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        matcher(route.get())
    }
}

/// 站内链接：拦截点击改为 History 导航
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
