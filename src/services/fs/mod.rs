pub mod listing;
pub mod owners;
pub mod resolve;

pub use listing::{is_hidden, DirListing, RawEntry};
pub use owners::{group_name, user_name};
pub use resolve::resolve_dir;
