//! Description of the machine this client runs on.

use clip_core::ClientInfo;

/// Agent name reported in place of a browser.
pub const AGENT_NAME: &str = concat!("clipify/", env!("CARGO_PKG_VERSION"));

/// Device/browser pair attached to outgoing clips.
///
/// A configured user-agent string is classified the way a browser's would
/// be; otherwise the host OS is reported directly.
pub fn host_client_info(user_agent: &str) -> ClientInfo {
    if user_agent.trim().is_empty() {
        ClientInfo::from_host_os(std::env::consts::OS, AGENT_NAME)
    } else {
        ClientInfo::from_user_agent(user_agent)
    }
}
