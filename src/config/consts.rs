// src/config/consts.rs

// Net config
pub const PAGE_URL: &str = "https://reserve.fumotoppara.net/reserved/reserved-calendar-list";
pub const LINE_BROADCAST_URL: &str = "https://api.line.me/v2/bot/message/broadcast";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "ja-JP,ja;q=0.9,en;q=0.5";
pub const TIMEOUT_MS: u64 = 30_000;

// Targets
pub const DEFAULT_DATE_LABEL: &str = "11/1";
pub const DEFAULT_ROWS: &str = "キャンプ宿泊,キャンプ日帰り";
pub const LIST_SEP: char = ',';

// Markers: circle (both code points seen in the wild) and triangle
pub const AVAILABLE_MARKERS: [&str; 3] = ["〇", "○", "△"];

// Message
pub const MESSAGE_TITLE: &str = "ふもとっぱら空き検知";

// Environment
pub const ENV_DATE_LABEL: &str = "TARGET_DATE_LABEL";
pub const ENV_DATE_LABELS: &str = "TARGET_DATE_LABELS";
pub const ENV_ROWS: &str = "TARGET_ROWS";
pub const ENV_TOKEN: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const ENV_TOKEN_LEGACY: &str = "LINE_NOTIFY_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "TIMEOUT_MS";
pub const ENV_ALWAYS_NOTIFY: &str = "ALWAYS_NOTIFY";
pub const ENV_STATE_FILE: &str = "NOTIFY_STATE_FILE";
pub const ENV_LOG: &str = "CAMP_WATCH_LOG";
