// crates/tw_physics/src/boundary/mod.rs

//! 边界条件模块
//!
//! 当前只包含壁面类边界处理。壁面函数作为边界约束写入调用方
//! 持有的累加场，不直接参与方程组装。

pub mod wall;

pub use wall::{EpsilonWallFunction, WallFieldBuffers, WallPatch};
