// crates/tw_physics/src/boundary/wall/mod.rs

//! 壁面函数模块
//!
//! 提供 ε 场的近壁边界约束计算：
//! - y_plus: 层流底层 y+ 阈值（不动点迭代）与局部 y+
//! - regime: 两区策略（粘性底层 / 对数律区）与逐面核心
//! - patch: 壁面片元（面索引仲裁）、瞬态面采样、映射构造
//! - accumulate: 加权累加缓冲与串行/并行求值路径
//! - epsilon: 低雷诺数 ε 壁面函数求值器
//!
//! # 使用方式
//!
//! ```
//! use tw_physics::boundary::wall::{
//!     EpsilonWallFunction, FaceSample, WallFace, WallFieldBuffers, WallPatch,
//! };
//! use tw_physics::types::WallFunctionConfig;
//!
//! let patch = WallPatch::new("bottom", vec![WallFace::new(0, 0.01, 1.0)]);
//! let wf = EpsilonWallFunction::new(patch, &WallFunctionConfig::new()).unwrap();
//!
//! let samples = [FaceSample::new(0.5, 1e-6, 1e-4, 10.0)];
//! let mut buffers = WallFieldBuffers::new(4);
//! wf.calculate(&samples, &mut buffers).unwrap();
//! assert!(buffers.dissipation()[0] > 0.0);
//! ```

pub mod accumulate;
pub mod epsilon;
pub mod patch;
pub mod regime;
pub mod y_plus;

pub use accumulate::{AccumulationStrategy, WallFieldBuffers};
pub use epsilon::EpsilonWallFunction;
pub use patch::{FaceMapper, FaceSample, WallFace, WallPatch, corner_weights};
pub use regime::{
    LowReWallTreatment, StandardWallTreatment, WallOutputs, WallRegime, WallTreatment,
    WallTreatmentKind,
};
pub use y_plus::{y_plus_lam, y_plus_local};
