//! HTTP 传输层
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`]，超时通过 `AbortController` 中止请求。

use charity_directory::{ClientError, ClientResult, HttpClient, HttpRequest, HttpResponse};
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

fn js_err(context: &str, e: JsValue) -> ClientError {
    ClientError::network(format!("{}: {:?}", context, e))
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    fn build(req: &HttpRequest, controller: Option<&AbortController>) -> ClientResult<Request> {
        let headers = Headers::new().map_err(|e| js_err("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_err("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }
        if let Some(controller) = controller {
            opts.set_signal(Some(&controller.signal()));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| js_err("构建请求失败", e))
    }

    async fn read_text(response: &Response) -> ClientResult<String> {
        let promise = response
            .text()
            .map_err(|e| ClientError::decode(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::decode(format!("{:?}", e)))?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let window = web_sys::window().ok_or_else(|| ClientError::network("无法获取 window 对象"))?;

        let controller = AbortController::new().ok();
        let request = Self::build(&req, controller.as_ref())?;

        // 超时后中止请求；请求先完成时 drop 会清除定时器
        let timed_out = Rc::new(Cell::new(false));
        let _timer = match (req.timeout, controller.clone()) {
            (Some(timeout), Some(controller)) => {
                let timed_out = timed_out.clone();
                Some(Timeout::new(timeout.as_millis() as u32, move || {
                    timed_out.set(true);
                    controller.abort();
                }))
            }
            _ => None,
        };

        let resp_value = match JsFuture::from(window.fetch_with_request(&request)).await {
            Ok(v) => v,
            Err(_) if timed_out.get() => {
                let ms = req.timeout.map(|t| t.as_millis() as u64).unwrap_or_default();
                tracing::warn!(url = %req.url, ms, "request aborted by timeout");
                return Err(ClientError::Timeout(ms));
            }
            Err(e) => return Err(js_err("网络错误", e)),
        };

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClientError::decode(format!("Response 类型转换失败: {:?}", e)))?;

        let body = Self::read_text(&response).await?;
        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
