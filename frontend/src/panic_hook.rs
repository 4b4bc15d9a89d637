//! Panic 屏障
//!
//! release 构建使用 `panic = "abort"`，渲染中的 panic 无法被组件树捕获。
//! 钩子在终止前记录日志，并把整个页面替换为刷新提示。

use std::panic;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(inline_js = "export function get_stack() { return new Error().stack; }")]
extern "C" {
    fn get_stack() -> String;
}

pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please refresh the page.";

fn fallback_markup() -> String {
    format!(
        r#"<div class="flex items-center justify-center min-h-screen"><div class="alert alert-error max-w-md" role="alert">{FALLBACK_MESSAGE}</div></div>"#
    )
}

#[cfg(target_arch = "wasm32")]
fn show_fallback() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        body.set_inner_html(&fallback_markup());
    }
}

/// 记录 panic：先写入 tracing（带 JS 调用栈），再交给 `console_error_panic_hook`
fn hook(info: &panic::PanicHookInfo) {
    #[cfg(target_arch = "wasm32")]
    {
        tracing::error!(stack = %get_stack(), "panic: {}", info);
        show_fallback();
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("panic: {}", info);

    console_error_panic_hook::hook(info);
}

/// 在挂载应用前调用一次
pub fn install() {
    panic::set_hook(Box::new(hook));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_replaces_page_with_refresh_prompt() {
        let markup = fallback_markup();
        assert!(markup.contains("Something went wrong. Please refresh the page."));
        assert!(markup.contains(r#"role="alert""#));
    }
}
