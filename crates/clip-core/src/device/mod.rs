mod client_info;
mod family;

pub use client_info::ClientInfo;
pub use family::DeviceFamily;
