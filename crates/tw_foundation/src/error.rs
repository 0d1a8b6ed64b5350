// crates/tw_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `TwError` 枚举和 `TwResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **快速失败**: 配置类错误在构造期拒绝（对数、除法在非正系数下无定义）
//! 2. **只留可达变体**: 枚举只包含组件实际产生的错误类别
//! 3. **边界清晰**: 数值奇异（近零壁距/粘性）不属于错误，由 IEEE 特殊值
//!    传播，诊断责任在调用方
//!
//! # 示例
//!
//! ```
//! use tw_foundation::error::{TwError, TwResult};
//!
//! fn resolve_cmu(value: f64) -> TwResult<f64> {
//!     if value <= 0.0 {
//!         return Err(TwError::invalid_config("Cmu", value.to_string(), "必须为正数"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(resolve_cmu(0.09).is_ok());
//! assert!(resolve_cmu(-0.09).is_err());
//! ```

use thiserror::Error;

/// 统一结果类型
pub type TwResult<T> = Result<T, TwError>;

/// TurbWall 错误类型
///
/// 核心错误类型，用于整个项目。所有变体都对应构造期或入参校验失败，
/// 数值核心内部不产生错误。
#[derive(Error, Debug)]
pub enum TwError {
    /// 配置值无效
    #[error("配置值无效: {key}={value}, 原因: {reason}")]
    InvalidConfig {
        /// 配置键名
        key: String,
        /// 配置值
        value: String,
        /// 无效原因说明
        reason: String,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 索引越界
    #[error("索引越界: {index_type} 索引 {index} 超出范围 0..{len}")]
    IndexOutOfBounds {
        /// 索引类别描述
        index_type: &'static str,
        /// 访问的索引
        index: usize,
        /// 上界（长度）
        len: usize,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl TwError {
    /// 配置值无效
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 数组大小不匹配
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 索引越界
    pub fn index_out_of_bounds(index_type: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            index_type,
            index,
            len,
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl TwError {
    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> TwResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }

    /// 检查索引是否在范围内
    #[inline]
    pub fn check_index(index_type: &'static str, index: usize, len: usize) -> TwResult<()> {
        if index >= len {
            Err(Self::index_out_of_bounds(index_type, index, len))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 测试
// ========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = TwError::invalid_config("kappa", "-0.41", "必须为正数");
        let msg = err.to_string();
        assert!(msg.contains("kappa"));
        assert!(msg.contains("-0.41"));
        assert!(msg.contains("必须为正数"));
    }

    #[test]
    fn test_size_mismatch_display() {
        let err = TwError::size_mismatch("samples", 10, 5);
        let msg = err.to_string();
        assert!(msg.contains("samples"));
        assert!(msg.contains("10"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn test_check_size() {
        assert!(TwError::check_size("samples", 10, 10).is_ok());
        assert!(TwError::check_size("samples", 10, 5).is_err());
    }

    #[test]
    fn test_check_index() {
        assert!(TwError::check_index("Cell", 5, 10).is_ok());
        assert!(TwError::check_index("Cell", 10, 10).is_err());
    }
}
