mod entry;
pub use entry::*;

mod workout;
pub use workout::*;
