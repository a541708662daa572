mod create;
pub use create::*;

mod fetch;
pub use fetch::*;

mod update;
pub use update::*;

mod delete;
pub use delete::*;
