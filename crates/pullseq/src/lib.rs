pub use pullseq_core::*;
pub use pullseq_rand as random;
pub use pullseq_sources::*;
pub use pullseq_store as store;

pub mod prelude {
    pub use pullseq_core::Step::*;
    pub use pullseq_core::*;
    pub use pullseq_rand::Randomness;
    pub use pullseq_sources::*;
}
