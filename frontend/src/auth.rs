//! 认证模块
//!
//! 启动时恢复会话并加载分类；登录后轮询未读通知数。
//! 路由服务只通过注入的会话信号感知认证状态。

use crate::store::{Api, StoreContext, use_api, use_store};
use crate::web::Interval;
use charity_directory::AuthHook;
use charity_directory::notifications::refresh_unread_count;
use charity_directory::store::init_store;
use charity_shared::Timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 恢复会话并加载分类，完成后标记就绪
pub fn init_auth(api: Api, store: StoreContext) {
    spawn_local(async move {
        let signed_in = AuthHook::new(&api, &store)
            .initialize_auth(Timestamp::now())
            .await;
        tracing::info!(signed_in, "auth initialized");
        store.mark_ready();
        init_store(&api, &store).await;
    });
}

/// 已登录期间按配置间隔轮询未读数；登出或卸载时停止
pub fn use_unread_polling() {
    let api = use_api();
    let store = use_store();
    let interval = StoredValue::new_local(None::<Interval>);
    let period = api.config().unread_poll_interval;

    let signed_in = store.signed_in();

    Effect::new(move |_| {
        if !signed_in.get() {
            interval.set_value(None);
            return;
        }
        let poll = {
            let api = api.clone();
            move || {
                let api = api.clone();
                spawn_local(async move {
                    refresh_unread_count(&api, &store).await;
                });
            }
        };
        poll();
        interval.set_value(Some(Interval::new(period, poll)));
    });

    on_cleanup(move || interval.set_value(None));
}
