// crates/tw_physics/src/boundary/wall/regime.rs

//! 两区壁面处理策略
//!
//! 本模块定义逐面求值核心与壁面处理策略：
//! - WallRegime: 分区判定（粘性底层 / 对数律区）
//! - WallOutputs: 逐面输出对（产生率, 耗散率）
//! - WallTreatment: 壁面处理策略 trait
//! - LowReWallTreatment: 低雷诺数处理（按 y+ 两区切换）
//! - StandardWallTreatment: 标准处理（恒用对数律）
//!
//! # 分区公式
//!
//! 对数律区（y+ > y+_lam）：
//!
//! ```text
//! ε = c_μ^{3/4} k^{3/2} / (κ y)
//! G = (ν_t + ν) |∂U/∂n| c_μ^{1/4} √k / (κ y)
//! ```
//!
//! 粘性底层（y+ ≤ y+_lam）：
//!
//! ```text
//! ε = 2 ν k / y²
//! G = (ν_t + ν) |∂U/∂n|²
//! ```
//!
//! 底层区的产生率取自线性速度分布的已解析梯度，而非对数律剪切。
//!
//! # 策略组合
//!
//! 壁面函数变体以策略值注入求值器，共用同一套加权累加路径，
//! 避免继承链。新变体实现 [`WallTreatment`] 即可接入。

use serde::{Deserialize, Serialize};
use tw_foundation::Scalar;

use super::patch::{FaceSample, WallFace};
use super::y_plus::y_plus_local;
use crate::types::WallFunctionCoeffs;

// ============================================================
// 分区判定
// ============================================================

/// 壁面相邻单元所处的流动分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallRegime {
    /// 粘性底层（y+ ≤ y+_lam）
    ViscousSublayer,
    /// 对数律区（y+ > y+_lam）
    LogLaw,
}

impl WallRegime {
    /// 按局部 y+ 与阈值判定分区
    ///
    /// 严格不等式定义边界：y+ 恰等于阈值时取粘性底层分支。
    #[inline]
    pub fn classify(y_plus: Scalar, y_plus_lam: Scalar) -> Self {
        if y_plus > y_plus_lam {
            Self::LogLaw
        } else {
            Self::ViscousSublayer
        }
    }
}

// ============================================================
// 逐面输出
// ============================================================

/// 逐面输出对：湍流产生率 G 与耗散率 ε
///
/// 非负输入下两个分量均非负。输出未加权，角权缩放在累加阶段进行。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallOutputs {
    /// 湍流产生率 G [m²/s³]
    pub production: Scalar,
    /// 耗散率 ε [m²/s³]
    pub dissipation: Scalar,
}

impl WallOutputs {
    /// 零输出常量
    pub const ZERO: Self = Self {
        production: 0.0,
        dissipation: 0.0,
    };

    /// 按角权缩放
    #[inline]
    pub fn scaled(self, weight: Scalar) -> Self {
        Self {
            production: self.production * weight,
            dissipation: self.dissipation * weight,
        }
    }
}

// ============================================================
// 处理策略
// ============================================================

/// 壁面处理策略
///
/// 逐面核心的统一抽象。每面输出只依赖该面自身的几何与采样值
/// 加上共享的不可变系数与阈值，因此跨面求值天然可并行。
pub trait WallTreatment: Send + Sync {
    /// 策略名称
    fn name(&self) -> &'static str;

    /// 计算单面的（未加权）产生率与耗散率
    fn evaluate_face(
        &self,
        coeffs: &WallFunctionCoeffs,
        y_plus_lam: Scalar,
        face: &WallFace,
        sample: &FaceSample,
    ) -> WallOutputs;
}

/// 对数律区公式
#[inline]
fn log_law_outputs(coeffs: &WallFunctionCoeffs, y: Scalar, sample: &FaceSample) -> WallOutputs {
    let kappa_y = coeffs.kappa() * y;
    WallOutputs {
        dissipation: coeffs.c_mu_75() * sample.k.powf(1.5) / kappa_y,
        production: (sample.nu_t + sample.nu)
            * sample.mag_grad_u
            * coeffs.c_mu_25()
            * sample.k.sqrt()
            / kappa_y,
    }
}

/// 粘性底层公式
#[inline]
fn sublayer_outputs(y: Scalar, sample: &FaceSample) -> WallOutputs {
    WallOutputs {
        dissipation: 2.0 * sample.k * sample.nu / (y * y),
        production: (sample.nu_t + sample.nu) * sample.mag_grad_u * sample.mag_grad_u,
    }
}

/// 低雷诺数壁面处理
///
/// 按局部 y+ 在粘性底层与对数律区之间切换，兼容底层已解析
/// 与未解析两类网格。
#[derive(Debug, Clone, Copy, Default)]
pub struct LowReWallTreatment;

impl WallTreatment for LowReWallTreatment {
    fn name(&self) -> &'static str {
        "low-Re"
    }

    fn evaluate_face(
        &self,
        coeffs: &WallFunctionCoeffs,
        y_plus_lam: Scalar,
        face: &WallFace,
        sample: &FaceSample,
    ) -> WallOutputs {
        let y = face.distance;
        let y_plus = y_plus_local(coeffs, sample.k, y, sample.nu);

        match WallRegime::classify(y_plus, y_plus_lam) {
            WallRegime::LogLaw => log_law_outputs(coeffs, y, sample),
            WallRegime::ViscousSublayer => sublayer_outputs(y, sample),
        }
    }
}

/// 标准壁面处理
///
/// 恒用对数律公式，要求壁面相邻单元全部落在对数律区
/// （高雷诺数网格）。
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWallTreatment;

impl WallTreatment for StandardWallTreatment {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn evaluate_face(
        &self,
        coeffs: &WallFunctionCoeffs,
        _y_plus_lam: Scalar,
        face: &WallFace,
        sample: &FaceSample,
    ) -> WallOutputs {
        log_law_outputs(coeffs, face.distance, sample)
    }
}

// ============================================================
// 策略标签
// ============================================================

static LOW_RE: LowReWallTreatment = LowReWallTreatment;
static STANDARD: StandardWallTreatment = StandardWallTreatment;

/// 壁面处理策略标签
///
/// 闭合变体集的配置标签。求值器按标签取静态策略实例，
/// 保持自身 `Clone` 语义简单。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallTreatmentKind {
    /// 低雷诺数两区处理
    #[default]
    LowRe,
    /// 标准对数律处理
    Standard,
}

impl WallTreatmentKind {
    /// 取对应的策略实例
    #[inline]
    pub fn treatment(&self) -> &'static dyn WallTreatment {
        match self {
            Self::LowRe => &LOW_RE,
            Self::Standard => &STANDARD,
        }
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs() -> WallFunctionCoeffs {
        WallFunctionCoeffs::default()
    }

    #[test]
    fn test_regime_classify_tie_break() {
        // 恰等于阈值时取粘性底层分支
        assert_eq!(
            WallRegime::classify(11.0, 11.0),
            WallRegime::ViscousSublayer
        );
        assert_eq!(WallRegime::classify(11.001, 11.0), WallRegime::LogLaw);
        assert_eq!(WallRegime::classify(1.0, 11.0), WallRegime::ViscousSublayer);
    }

    #[test]
    fn test_sublayer_dissipation_formula() {
        // y+ 远低于阈值：ε = 2νk/y²
        let c = coeffs();
        let face = WallFace::new(0, 1e-5, 1.0);
        let sample = FaceSample::new(1e-4, 1e-6, 0.0, 0.0);

        let out = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        let expected = 2.0 * 1e-4 * 1e-6 / (1e-5_f64 * 1e-5);
        assert!((out.dissipation - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_log_law_dissipation_formula() {
        // y+ 远高于阈值：ε = c_μ^{3/4} k^{3/2} / (κy)
        let c = coeffs();
        let face = WallFace::new(0, 0.01, 1.0);
        let sample = FaceSample::new(0.5, 1e-6, 1e-4, 10.0);

        let out = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        let expected = 0.09_f64.powf(0.75) * 0.5_f64.powf(1.5) / (0.41 * 0.01);
        assert!((out.dissipation - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_log_law_production_formula() {
        let c = coeffs();
        let face = WallFace::new(0, 0.01, 1.0);
        let sample = FaceSample::new(0.5, 1e-6, 1e-4, 10.0);

        let out = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        let expected =
            (1e-4 + 1e-6) * 10.0 * 0.09_f64.powf(0.25) * 0.5_f64.sqrt() / (0.41 * 0.01);
        assert!((out.production - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_sublayer_production_from_linear_profile() {
        // 底层区产生率 G = (ν_t+ν)|∂U/∂n|²
        let c = coeffs();
        let face = WallFace::new(0, 1e-5, 1.0);
        let sample = FaceSample::new(1e-4, 1e-6, 2e-6, 50.0);

        let out = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        let expected = (2e-6 + 1e-6) * 50.0 * 50.0;
        assert!((out.production - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_standard_treatment_ignores_threshold() {
        // 标准处理在底层网格上仍用对数律
        let c = coeffs();
        let face = WallFace::new(0, 1e-5, 1.0);
        let sample = FaceSample::new(1e-4, 1e-6, 0.0, 0.0);

        let low_re = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        let standard = StandardWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
        assert!(standard.dissipation != low_re.dissipation);

        let expected = 0.09_f64.powf(0.75) * 1e-4_f64.powf(1.5) / (0.41 * 1e-5);
        assert!((standard.dissipation - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_outputs_nonnegative() {
        let c = coeffs();
        let face = WallFace::new(0, 0.003, 0.5);
        for &k in &[0.0, 1e-6, 0.01, 1.0] {
            let sample = FaceSample::new(k, 1e-6, 1e-5, 3.0);
            let out = LowReWallTreatment.evaluate_face(&c, 11.0, &face, &sample);
            assert!(out.production >= 0.0);
            assert!(out.dissipation >= 0.0);
        }
    }

    #[test]
    fn test_outputs_scaled() {
        let out = WallOutputs {
            production: 2.0,
            dissipation: 4.0,
        };
        let half = out.scaled(0.5);
        assert!((half.production - 1.0).abs() < 1e-15);
        assert!((half.dissipation - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_treatment_kind_dispatch() {
        assert_eq!(WallTreatmentKind::LowRe.treatment().name(), "low-Re");
        assert_eq!(WallTreatmentKind::Standard.treatment().name(), "standard");
        assert_eq!(WallTreatmentKind::default(), WallTreatmentKind::LowRe);
    }
}
