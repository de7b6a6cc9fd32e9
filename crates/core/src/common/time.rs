use chrono::{DateTime, Utc};
use std::sync::RwLock;

/// # Summary
/// 时钟接口，用于隔离物理系统时间。
/// 看板的 "Last Updated" 时间戳必须通过此接口获取，以便测试固定时间。
pub trait Clock: Send + Sync {
    /// 获取当前时间
    fn now(&self) -> DateTime<Utc>;
}

/// # Summary
/// 生产环境使用的系统时钟，直接返回操作系统当前时间。
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// # Summary
/// 固定时钟，时间只会被显式修改。
///
/// # Invariants
/// - 并发安全：内部利用 `RwLock` 保护当前时间。
/// - 锁中毒时仍返回最后一次写入的时间。
pub struct FixedClock {
    current: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: RwLock::new(at),
        }
    }

    /// 拨动时钟
    pub fn set(&self, at: DateTime<Utc>) {
        match self.current.write() {
            Ok(mut guard) => *guard = at,
            Err(poisoned) => *poisoned.into_inner() = at,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
