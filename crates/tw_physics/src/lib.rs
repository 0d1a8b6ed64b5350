// crates/tw_physics/src/lib.rs

//! 近壁湍流壁面函数模块
//!
//! 为 k-ε 系列湍流闭合的耗散率场（ε）提供近壁边界约束，包括：
//! - 模型系数与配置层 (types)
//! - 壁面边界条件 (boundary) - 低雷诺数 ε 壁面函数、y+ 阈值、
//!   分区策略、加权累加
//!
//! # 两区壁面处理
//!
//! 壁面相邻单元按局部无量纲壁距 y+ 分为两区：
//!
//! ```text
//! y+ > y+_lam:  对数律区   ε = c_μ^{3/4} k^{3/2} / (κ y)
//! y+ ≤ y+_lam:  粘性底层   ε = 2 ν k / y²
//! ```
//!
//! 切换阈值 y+_lam 由线性律 U+ = y+ 与对数律 U+ = ln(E y+)/κ 的
//! 交点确定，在构造期计算一次并缓存。
//!
//! # 职责边界
//!
//! 网格/片元数据结构、线性系统组装、湍流输运方程本体、场 I/O
//! 均为外部协作者，本 crate 只提供逐面求值与加权累加。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod types;

// 重导出常用类型
pub use boundary::wall::{
    AccumulationStrategy, EpsilonWallFunction, FaceMapper, FaceSample, LowReWallTreatment,
    StandardWallTreatment, WallFace, WallFieldBuffers, WallOutputs, WallPatch, WallRegime,
    WallTreatment, WallTreatmentKind, corner_weights, y_plus_lam, y_plus_local,
};
pub use types::{WallFunctionCoeffs, WallFunctionConfig};
