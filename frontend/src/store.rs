//! 全局状态与 API 客户端的上下文
//!
//! 状态树保存在本地信号中，分发动作时经核心库的 `reduce` 生成新状态。
//! 任何动作都会通知读取整棵状态树的订阅者；只关心会话的 Effect 应读取
//! [`StoreContext::signed_in`] / [`StoreContext::role`] 这类 memo。

use crate::web::router::SessionView;
use crate::web::{BrowserStorage, FetchClient};
use charity_directory::store::{Action, AppState, Dispatch, reduce};
use charity_directory::{ApiClient, ClientConfig};
use charity_shared::Role;
use leptos::prelude::*;

/// 浏览器环境下的 API 客户端
pub type Api = ApiClient<FetchClient, BrowserStorage>;

#[derive(Clone, Copy)]
pub struct StoreContext {
    state: RwSignal<AppState, LocalStorage>,
    /// 启动时的会话恢复是否完成
    ready: RwSignal<bool>,
    signed_in: Memo<bool>,
    role: Memo<Option<Role>>,
}

impl StoreContext {
    fn new() -> Self {
        let state = RwSignal::new_local(AppState::default());
        Self {
            state,
            ready: RwSignal::new(false),
            signed_in: Memo::new(move |_| state.with(|s| s.is_authenticated)),
            role: Memo::new(move |_| state.with(|s| s.role())),
        }
    }

    /// 登录状态，只在值变化时通知订阅者
    pub fn signed_in(&self) -> Memo<bool> {
        self.signed_in
    }

    pub fn role(&self) -> Memo<Option<Role>> {
        self.role
    }

    /// 只读访问状态树的某个切片（会被追踪）
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }

    pub fn select_untracked<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with_untracked(f)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn mark_ready(&self) {
        self.ready.set(true);
    }

    /// 注入路由守卫的会话视图
    pub fn session(&self) -> Signal<SessionView> {
        let store = *self;
        Signal::derive(move || SessionView {
            is_authenticated: store.signed_in.get(),
            role: store.role.get(),
            ready: store.is_ready(),
        })
    }
}

impl Dispatch for StoreContext {
    fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        self.state.update(|state| *state = reduce(state, action));
    }
}

/// 创建 API 客户端与状态并放入上下文
///
/// 会话期间的 401 会分发 `Logout`，路由守卫随后把受保护页面重定向到登录页。
pub fn provide_app_context() -> (Api, StoreContext) {
    let store = StoreContext::new();
    let api = ApiClient::new(ClientConfig::from_build_env(), FetchClient, BrowserStorage)
        .on_unauthorized(move || store.dispatch(Action::Logout));
    provide_context(api.clone());
    provide_context(store);
    (api, store)
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}

pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use charity_shared::User;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting<T: Clone + PartialEq + Send + Sync + 'static>(
        source: impl Fn() -> T + Send + Sync + 'static,
    ) -> (Memo<T>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let memo = Memo::new({
            let runs = runs.clone();
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                source()
            }
        });
        (memo, runs)
    }

    #[test]
    fn session_subscribers_ignore_unrelated_actions() {
        let owner = Owner::new();
        owner.set();
        let store = StoreContext::new();
        let (via_memo, memo_runs) = counting(move || store.signed_in().get());
        let (via_state, state_runs) = counting(move || store.select(|s| s.is_authenticated));

        assert!(!via_memo.get());
        assert!(!via_state.get());
        for n in 1..=5 {
            store.dispatch(Action::SetUnreadCount(n));
            via_memo.get();
            via_state.get();
        }

        assert_eq!(memo_runs.load(Ordering::SeqCst), 1);
        assert_eq!(state_runs.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn signing_out_notifies_session_subscribers() {
        let owner = Owner::new();
        owner.set();
        let store = StoreContext::new();
        store.dispatch(Action::SetUser(Some(User {
            id: 1,
            email: "a@b.com".into(),
            name: None,
            role: Role::OrgAdmin,
            is_verified: true,
            google_linked: false,
        })));
        let (signed_in, runs) = counting(move || store.signed_in().get());

        assert!(signed_in.get());
        assert_eq!(store.role().get(), Some(Role::OrgAdmin));
        store.dispatch(Action::Logout);

        assert!(!signed_in.get());
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(store.role().get(), None);
    }
}
