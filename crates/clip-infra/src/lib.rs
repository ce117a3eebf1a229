pub mod backend;
pub mod editor;
pub mod fs;
pub mod time;
pub mod view;

pub use backend::HttpClipBackend;
pub use editor::InMemoryEditorSurface;
pub use fs::FileIdentityStore;
pub use time::SystemClock;
pub use view::FileFeedView;
