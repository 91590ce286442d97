mod feed;
mod note;
mod roster;

pub use feed::FeedCommands;
pub use note::{FillArgs, NoteCommands, ParseArgs, PipelineArgs};
pub use roster::RosterCommands;
