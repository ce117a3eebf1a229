use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Coarse client family used to pick the icon shown next to a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceFamily {
    Windows,
    MacOS,
    IOS,
    Android,
    Linux,
    Unknown,
}

impl DeviceFamily {
    /// Classify a free-text `device_type` by substring, case-insensitively.
    ///
    /// Mobile families are matched before desktop ones because Android
    /// user agents also mention Linux and iOS ones mention "Mac OS X".
    pub fn classify(device_type: &str) -> Self {
        let s = device_type.to_ascii_lowercase();
        if s.contains("android") {
            DeviceFamily::Android
        } else if s.contains("iphone") || s.contains("ipad") || s.contains("ipod") || s.starts_with("ios") {
            DeviceFamily::IOS
        } else if s.contains("windows") || s.starts_with("win") {
            DeviceFamily::Windows
        } else if s.contains("mac") || s.contains("os x") || s.contains("darwin") {
            DeviceFamily::MacOS
        } else if s.contains("linux") || s.contains("ubuntu") || s.contains("x11") {
            DeviceFamily::Linux
        } else {
            DeviceFamily::Unknown
        }
    }

    /// Font Awesome icon classes for this family.
    pub fn icon_class(&self) -> &'static str {
        match self {
            DeviceFamily::Windows => "fab fa-windows",
            DeviceFamily::MacOS | DeviceFamily::IOS => "fab fa-apple",
            DeviceFamily::Android => "fab fa-android",
            DeviceFamily::Linux => "fab fa-linux",
            DeviceFamily::Unknown => "fas fa-desktop",
        }
    }
}

impl FromStr for DeviceFamily {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DeviceFamily::classify(s))
    }
}

impl Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFamily::Windows => write!(f, "Windows"),
            DeviceFamily::MacOS => write!(f, "Mac OS"),
            DeviceFamily::IOS => write!(f, "iOS"),
            DeviceFamily::Android => write!(f, "Android"),
            DeviceFamily::Linux => write!(f, "Linux"),
            DeviceFamily::Unknown => write!(f, "Unknown"),
        }
    }
}
