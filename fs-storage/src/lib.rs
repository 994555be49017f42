pub mod base_storage;
pub mod file_storage;
pub mod memory_storage;

pub const FEED_FOLDER: &str = ".linkfeed";
pub const STORAGE_FILE: &str = "local_storage.json";

// Keys inside the storage namespace
pub const USER_KEY: &str = "linkedinUser";
pub const POSTS_KEY: &str = "linkedinPosts";
