mod file_feed_view;

pub use file_feed_view::FileFeedView;
