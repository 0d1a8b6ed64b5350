// crates/tw_foundation/src/scalar.rs

//! 统一标量类型系统
//!
//! 通过 feature 控制精度，为 GPU 和混合精度预留接口。
//!
//! # 用法
//!
//! ```
//! use tw_foundation::scalar::Scalar;
//!
//! let y_plus: Scalar = 11.0;
//! assert!(y_plus.is_finite());
//! ```
//!
//! # Feature 控制
//!
//! - 默认: `Scalar = f64`
//! - `gpu-f32` feature: `Scalar = f32`

/// 计算用标量类型（默认 f64，启用 gpu-f32 feature 时为 f32）
#[cfg(not(feature = "gpu-f32"))]
pub type Scalar = f64;

/// 计算用标量类型（gpu-f32 精度）
#[cfg(feature = "gpu-f32")]
pub type Scalar = f32;
