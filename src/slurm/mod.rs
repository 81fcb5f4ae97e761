mod misc;
mod salloc;
mod sinfo;

pub use misc::{display_command, exit_code};
pub use salloc::Allocation;
pub use sinfo::{sinfo_format, NodeQuery, LIPS_NODESPEC, SINFO_BIN};
