// crates/tw_foundation/src/lib.rs

//! TurbWall Foundation Layer
//!
//! 零依赖基础层，提供湍流壁面模型组件的基础抽象。
//!
//! # 模块概览
//!
//! - [`scalar`]: 统一标量类型，通过 feature 控制计算精度
//! - [`error`]: 统一错误类型与运行时校验工具
//!
//! # 设计原则
//!
//! 1. **零外部依赖**: 仅依赖 thiserror
//! 2. **快速失败**: 非法配置在构造期拒绝，不进入数值核心
//! 3. **零开销抽象**: release 模式下最小化运行时开销
//!
//! # 示例
//!
//! ```
//! use tw_foundation::{Scalar, TwError, TwResult};
//!
//! fn check_coefficient(value: Scalar) -> TwResult<()> {
//!     if value <= 0.0 {
//!         return Err(TwError::invalid_config("kappa", value.to_string(), "必须为正数"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_coefficient(0.41).is_ok());
//! assert!(check_coefficient(-1.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;

// 重导出常用类型
pub use error::{TwError, TwResult};
pub use scalar::Scalar;

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{TwError, TwResult};
    pub use crate::scalar::Scalar;
}
