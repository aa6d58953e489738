mod channel;
mod descriptor;
mod event;
mod workspace;

pub use channel::*;
pub use descriptor::*;
pub use event::*;
pub use workspace::*;
