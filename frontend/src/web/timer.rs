//! 定时器封装模块

use charity_directory::Sleeper;
use gloo_timers::callback::Interval as GlooInterval;
use std::time::Duration;

/// 周期性定时器，drop 时自动清除
pub struct Interval {
    _inner: GlooInterval,
}

impl Interval {
    pub fn new<F>(period: Duration, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            _inner: GlooInterval::new(period.as_millis() as u32, callback),
        }
    }
}

/// 基于 `setTimeout` 的异步等待，供防抖器使用
#[derive(Clone, Copy, Default)]
pub struct TimeoutSleeper;

#[async_trait::async_trait(?Send)]
impl Sleeper for TimeoutSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await
    }
}
