//! 时钟（Clock）
//!
//! 组件以毫秒级 Unix 时间戳标记出站请求。`SystemClock` 读取墙上时钟，
//! 并保证同一实例返回的值单调不减。
//!
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    /// 自 Unix 纪元起的毫秒数
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        // 墙上时钟回拨时沿用上一次的值
        let prev = self.last.fetch_max(now, Ordering::AcqRel);
        prev.max(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let mut prev = clock.now_millis();
        for _ in 0..1000 {
            let now = clock.now_millis();
            assert!(now >= prev);
            prev = now;
        }
    }

    #[test]
    fn system_clock_tracks_wall_time() {
        let clock = SystemClock::new();
        let before = Utc::now().timestamp_millis();
        let now = clock.now_millis();
        let after = Utc::now().timestamp_millis();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn system_clock_never_goes_back() {
        let clock = SystemClock::new();
        let future = Utc::now().timestamp_millis() + 60_000;
        clock.last.store(future, Ordering::Release);
        assert_eq!(clock.now_millis(), future);
    }
}
