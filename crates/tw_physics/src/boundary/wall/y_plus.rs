// crates/tw_physics/src/boundary/wall/y_plus.rs

//! 无量纲壁距 y+ 计算
//!
//! # 层流底层阈值 y+_lam
//!
//! 粘性底层线性律与对数律的交点：
//!
//! ```text
//! U+ = y+              (粘性底层)
//! U+ = ln(E y+) / κ    (对数律区)
//! ```
//!
//! 交点满足 y = ln(E y)/κ，用不动点迭代求解：
//!
//! ```text
//! y_{n+1} = ln(max(E y_n, 1)) / κ
//! ```
//!
//! 初值 11.0，收敛容差 1e-4，迭代上限 10 次。`max(·, 1)` 钳制
//! 保证对数自变量不小于 1；迭代值另设下限 y+ = 1，退化系数组合
//! （如 E = 1 且 κ ≥ 0.4，此时两条速度律无正交点）收敛到该下限，
//! 保证阈值恒为正。未收敛时接受末次迭代值：阈值只用于分区切换，
//! 1e-4 级别的偏差对分区选择无实际影响。
//!
//! # 局部 y+
//!
//! 逐面定义（基于湍动能的摩擦速度代理 u* = c_μ^{1/4} √k）：
//!
//! ```text
//! y+ = c_μ^{1/4} √k · y / ν
//! ```

use tracing::debug;
use tw_foundation::Scalar;

use crate::types::WallFunctionCoeffs;

/// 不动点迭代初值
const Y_PLUS_LAM_GUESS: Scalar = 11.0;

/// 收敛容差
const Y_PLUS_LAM_TOL: Scalar = 1e-4;

/// 迭代上限
const Y_PLUS_LAM_MAX_ITERS: usize = 10;

/// 阈值下限
const Y_PLUS_LAM_MIN: Scalar = 1.0;

/// 计算层流底层边缘的 y+ 阈值
///
/// 纯函数；求值器在构造期调用一次并缓存结果。
/// 前置条件 `kappa > 0`、`e > 0` 由 [`WallFunctionCoeffs`] 的
/// 构造校验保证。
///
/// # 示例
///
/// ```
/// use tw_physics::boundary::wall::y_plus_lam;
///
/// // 标准系数下两条速度律交于 y+ ≈ 11.53
/// let ypl = y_plus_lam(0.41, 9.8);
/// assert!((ypl - 11.53).abs() < 1e-2);
/// ```
pub fn y_plus_lam(kappa: Scalar, e: Scalar) -> Scalar {
    let mut ypl = Y_PLUS_LAM_GUESS;

    for iter in 0..Y_PLUS_LAM_MAX_ITERS {
        let next = ((e * ypl).max(1.0).ln() / kappa).max(Y_PLUS_LAM_MIN);
        let delta = (next - ypl).abs();
        ypl = next;

        if delta < Y_PLUS_LAM_TOL {
            return ypl;
        }

        if iter + 1 == Y_PLUS_LAM_MAX_ITERS {
            // 未达容差不是错误：接受末次迭代值
            debug!(
                kappa,
                e,
                y_plus_lam = ypl,
                residual = delta,
                "y+ 阈值迭代达到上限，接受末次迭代值"
            );
        }
    }

    ypl
}

/// 计算单面的局部 y+
///
/// `y+ = c_μ^{1/4} √k · y / ν`
///
/// 近零 `nu` 属于调用方前置条件违例，产生的 IEEE 特殊值原样传播。
#[inline]
pub fn y_plus_local(coeffs: &WallFunctionCoeffs, k: Scalar, y: Scalar, nu: Scalar) -> Scalar {
    coeffs.c_mu_25() * k.sqrt() * y / nu
}

// ============================================================
// 测试
// ============================================================
