use chrono::{DateTime, Duration, Utc};

/// How long a success banner stays visible.
pub const SUCCESS_NOTICE_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient banner reporting the outcome of a save, delete, or export.
///
/// Success banners expire on their own; error banners stay until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into(), raised_at: now }
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into(), raised_at: now }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.level {
            NoticeLevel::Success => {
                now - self.raised_at >= Duration::seconds(SUCCESS_NOTICE_TTL_SECS)
            }
            NoticeLevel::Error => false,
        }
    }
}
