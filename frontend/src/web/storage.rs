//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`TokenStore`]。存储不可用时
//! （隐私模式、禁用 cookie）所有读写静默失败，表现为未登录。

use charity_directory::TokenStore;

/// 浏览器 localStorage
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
