pub mod dispatch;
pub mod feed;
pub mod note;
pub mod roster;
pub mod schema;
pub mod shared;
