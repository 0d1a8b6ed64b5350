// crates/tw_physics/src/types.rs

//! 壁面函数模型系数与配置层
//!
//! 本模块定义壁面函数计算所需的经验系数：
//! - WallFunctionCoeffs: 校验后的系数集（含预计算幂次）
//! - WallFunctionConfig: 可选覆盖的配置记录
//!
//! # 默认系数（Launder-Spalding 标准值）
//!
//! | 系数 | 值 |
//! |------|-----|
//! | c_μ | 0.09 |
//! | κ（von Kármán 常数） | 0.41 |
//! | E（壁面粗糙度系数） | 9.8 |
//!
//! 所有系数必须严格为正：下游公式含对数与除法，非正系数无定义。

use serde::{Deserialize, Serialize};
use tw_foundation::{Scalar, TwError, TwResult};

/// 系数校验下限（严格为正）
const COEFF_MIN: f64 = 1e-12;

/// 系数校验上限（防止明显的单位错误输入）
const COEFF_MAX: f64 = 1e3;

/// 校验单个系数，失败时报 [`TwError::InvalidConfig`]
fn check_coeff(key: &'static str, value: Scalar) -> TwResult<()> {
    let v = value as f64; // ALLOW_F64: 错误报告统一用 f64
    if !(COEFF_MIN..=COEFF_MAX).contains(&v) {
        return Err(TwError::invalid_config(
            key,
            v.to_string(),
            "必须为正且不超过 1e3",
        ));
    }
    Ok(())
}

// ============================================================
// 模型系数
// ============================================================

/// 壁面函数模型系数
///
/// 构造后不可变。`c_mu_25`/`c_mu_75` 为预计算幂次，
/// 逐面核心中直接使用，避免每面重复 `powf`。
/// 序列化面向 [`WallFunctionConfig`]，本类型只经校验构造产生。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFunctionCoeffs {
    /// c_μ 系数
    c_mu: Scalar,
    /// von Kármán 常数 κ
    kappa: Scalar,
    /// 壁面粗糙度系数 E
    e: Scalar,
    /// c_μ^{1/4} - 预计算以提高性能
    c_mu_25: Scalar,
    /// c_μ^{3/4} - 预计算以提高性能
    c_mu_75: Scalar,
}

impl WallFunctionCoeffs {
    /// 创建并校验系数集
    ///
    /// # 错误
    /// 任一系数不在 (0, 1e3] 范围内时返回 [`TwError::InvalidConfig`]。
    pub fn new(c_mu: Scalar, kappa: Scalar, e: Scalar) -> TwResult<Self> {
        check_coeff("Cmu", c_mu)?;
        check_coeff("kappa", kappa)?;
        check_coeff("E", e)?;

        Ok(Self {
            c_mu,
            kappa,
            e,
            c_mu_25: c_mu.powf(0.25),
            c_mu_75: c_mu.powf(0.75),
        })
    }

    /// c_μ 系数
    #[inline]
    pub fn c_mu(&self) -> Scalar {
        self.c_mu
    }

    /// von Kármán 常数 κ
    #[inline]
    pub fn kappa(&self) -> Scalar {
        self.kappa
    }

    /// 壁面粗糙度系数 E
    #[inline]
    pub fn e(&self) -> Scalar {
        self.e
    }

    /// c_μ^{1/4}
    #[inline]
    pub fn c_mu_25(&self) -> Scalar {
        self.c_mu_25
    }

    /// c_μ^{3/4}
    #[inline]
    pub fn c_mu_75(&self) -> Scalar {
        self.c_mu_75
    }
}

impl Default for WallFunctionCoeffs {
    fn default() -> Self {
        let c_mu: Scalar = 0.09;
        Self {
            c_mu,
            kappa: 0.41,
            e: 9.8,
            c_mu_25: c_mu.powf(0.25),
            c_mu_75: c_mu.powf(0.75),
        }
    }
}

// ============================================================
// 配置记录
// ============================================================

/// 壁面函数配置记录
///
/// 平坦键值记录，字段全部可选；缺省字段在 [`resolve`](Self::resolve)
/// 时落到标准默认值。用于从配置文件反序列化边界条件参数。
///
/// # 示例
///
/// ```
/// use tw_physics::types::WallFunctionConfig;
///
/// let config = WallFunctionConfig::new().with_kappa(0.40);
/// let coeffs = config.resolve().unwrap();
/// assert!((coeffs.kappa() - 0.40).abs() < 1e-12);
/// assert!((coeffs.c_mu() - 0.09).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WallFunctionConfig {
    /// c_μ 覆盖值（默认 0.09）
    pub c_mu: Option<Scalar>,
    /// κ 覆盖值（默认 0.41）
    pub kappa: Option<Scalar>,
    /// E 覆盖值（默认 9.8）
    pub e: Option<Scalar>,
}

impl WallFunctionConfig {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 c_μ
    pub fn with_c_mu(mut self, c_mu: Scalar) -> Self {
        self.c_mu = Some(c_mu);
        self
    }

    /// 设置 κ
    pub fn with_kappa(mut self, kappa: Scalar) -> Self {
        self.kappa = Some(kappa);
        self
    }

    /// 设置 E
    pub fn with_e(mut self, e: Scalar) -> Self {
        self.e = Some(e);
        self
    }

    /// 应用默认值并校验，生成不可变系数集
    ///
    /// # 错误
    /// 任一覆盖值非正或超界时返回 [`TwError::InvalidConfig`]。
    pub fn resolve(&self) -> TwResult<WallFunctionCoeffs> {
        WallFunctionCoeffs::new(
            self.c_mu.unwrap_or(0.09),
            self.kappa.unwrap_or(0.41),
            self.e.unwrap_or(9.8),
        )
    }
}

// ============================================================
// 测试
// ============================================================
