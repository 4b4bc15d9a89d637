//! `locationChanged` 自定义事件
//!
//! 位置筛选变化时在 `window` 上派发 CustomEvent，`detail` 为筛选对象或 `null`。

use crate::serde_helper;
use charity_directory::LocationEventBus;
use charity_shared::{EVENT_LOCATION_CHANGED, LocationFilter};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit};

#[derive(Clone, Copy, Default)]
pub struct WindowEventBus;

impl LocationEventBus for WindowEventBus {
    fn emit(&self, filter: Option<&LocationFilter>) {
        let detail = match filter {
            Some(f) => serde_helper::to_value(f).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        };
        let init = CustomEventInit::new();
        init.set_detail(&detail);

        let Some(window) = web_sys::window() else {
            return;
        };
        match CustomEvent::new_with_event_init_dict(EVENT_LOCATION_CHANGED, &init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => tracing::warn!(error = ?e, "failed to build locationChanged event"),
        }
    }
}

/// 订阅 `locationChanged`；返回的句柄 drop 时移除监听
pub struct LocationListener {
    closure: Closure<dyn Fn(web_sys::Event)>,
}

impl LocationListener {
    pub fn new<F>(callback: F) -> Option<Self>
    where
        F: Fn(Option<LocationFilter>) + 'static,
    {
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let filter = event
                .dyn_ref::<CustomEvent>()
                .map(|e| e.detail())
                .filter(|d| !d.is_null() && !d.is_undefined())
                .and_then(|d| serde_helper::from_value::<LocationFilter>(d).ok());
            callback(filter);
        });
        web_sys::window()?
            .add_event_listener_with_callback(EVENT_LOCATION_CHANGED, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for LocationListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                EVENT_LOCATION_CHANGED,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
