use serde::{Deserialize, Serialize};

use super::DeviceFamily;

/// OS/browser description attached to outgoing clips.
///
/// Advisory display metadata only; nothing gates on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    pub device_type: String,
    pub browser: String,
}

impl ClientInfo {
    pub fn new(device_type: impl Into<String>, browser: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            browser: browser.into(),
        }
    }

    /// Best-effort classification of a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let family = DeviceFamily::classify(user_agent);
        let device_type = match family {
            DeviceFamily::Unknown => "Unknown".to_string(),
            other => other.to_string(),
        };
        Self {
            device_type,
            browser: browser_from_user_agent(user_agent).to_string(),
        }
    }

    /// Build from an OS identifier as reported by the host
    /// (`std::env::consts::OS` values such as `linux`, `macos`, `windows`).
    pub fn from_host_os(os: &str, agent: &str) -> Self {
        let family = DeviceFamily::classify(os);
        let device_type = match family {
            DeviceFamily::Unknown if !os.is_empty() => os.to_string(),
            DeviceFamily::Unknown => "Unknown".to_string(),
            other => other.to_string(),
        };
        Self::new(device_type, agent)
    }

    pub fn family(&self) -> DeviceFamily {
        DeviceFamily::classify(&self.device_type)
    }
}

/// Order matters: Edge and Opera also advertise Chrome, Chrome also
/// advertises Safari.
fn browser_from_user_agent(ua: &str) -> &'static str {
    if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("SamsungBrowser") {
        "Samsung Internet"
    } else if ua.contains("Firefox/") || ua.contains("FxiOS") {
        "Firefox"
    } else if ua.contains("Chrome/") || ua.contains("CriOS") {
        "Chrome"
    } else if ua.contains("Safari/") {
        "Safari"
    } else {
        "Unknown"
    }
}
