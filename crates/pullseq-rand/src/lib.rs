mod randomness;
mod select;

pub use randomness::{
    FixedRandomness, Randomness, ScriptedRandomness, StdRandomness, ThreadRandomness,
};
pub use select::{random_item, SelectError};
