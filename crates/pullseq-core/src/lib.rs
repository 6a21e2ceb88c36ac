mod never;
mod source;
mod step;

pub use never::Never;
pub use source::{DeferredPullSource, PullSource, PullSourceExt, Pulls};
pub use step::Step;
