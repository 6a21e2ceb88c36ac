mod iter_source;
mod random_halt;
mod ready_source;
mod stream;

pub use iter_source::IterSource;
pub use random_halt::RandomHaltSource;
pub use ready_source::ReadySource;
pub use stream::into_stream;
