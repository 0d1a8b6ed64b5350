// crates/tw_physics/src/boundary/wall/epsilon.rs

//! 低雷诺数 ε 壁面函数求值器
//!
//! 把近壁 ε 值与产生率直接写入调用方的累加场，作为 ε 方程在
//! 壁面相邻单元的约束。按局部 y+ 在粘性底层与对数律区之间切换，
//! 底层已解析与未解析的网格都可使用。
//!
//! # 生命周期
//!
//! 系数在构造期校验并固定，层流底层 y+ 阈值随之计算一次并缓存。
//! 克隆与映射构造（[`construct_by_mapping`](EpsilonWallFunction::construct_by_mapping)）
//! 逐位复制系数与阈值，不重新计算；面几何由新片元上下文重取。
//!
//! # 每外迭代的调用约定
//!
//! 调用方清零缓冲 → 对每个壁面边界调用 [`calculate`](EpsilonWallFunction::calculate)
//! → 累加结果进入方程组装。多个边界条件向同一缓冲累加，顺序无关
//! （浮点求和结合性除外）。

use tw_foundation::{Scalar, TwError, TwResult};

use super::accumulate::{
    AccumulationStrategy, WallFieldBuffers, evaluate_parallel, evaluate_serial,
};
use super::patch::{FaceMapper, FaceSample, WallFace, WallPatch};
use super::regime::WallTreatmentKind;
use super::y_plus::y_plus_lam;
use crate::types::{WallFunctionCoeffs, WallFunctionConfig};

/// 低雷诺数 ε 壁面函数求值器
///
/// 持有片元面集、校验后的模型系数、缓存的 y+ 阈值，以及
/// 处理策略与累加策略标签。除缓存阈值外无逐调用状态。
#[derive(Debug, Clone)]
pub struct EpsilonWallFunction {
    /// 壁面片元
    patch: WallPatch,
    /// 模型系数（构造后不可变）
    coeffs: WallFunctionCoeffs,
    /// 层流底层 y+ 阈值（构造期计算一次）
    y_plus_lam: Scalar,
    /// 壁面处理策略
    treatment: WallTreatmentKind,
    /// 累加策略
    strategy: AccumulationStrategy,
}

impl EpsilonWallFunction {
    /// 从配置记录构造
    ///
    /// 缺省系数落到标准默认值 (0.09, 0.41, 9.8)。
    ///
    /// # 错误
    /// 任一系数非正或超界时返回 [`TwError::InvalidConfig`]。
    pub fn new(patch: WallPatch, config: &WallFunctionConfig) -> TwResult<Self> {
        Ok(Self::with_coeffs(patch, config.resolve()?))
    }

    /// 从已校验的系数集构造
    pub fn with_coeffs(patch: WallPatch, coeffs: WallFunctionCoeffs) -> Self {
        let y_plus_lam = y_plus_lam(coeffs.kappa(), coeffs.e());
        Self {
            patch,
            coeffs,
            y_plus_lam,
            treatment: WallTreatmentKind::default(),
            strategy: AccumulationStrategy::default(),
        }
    }

    /// 设置壁面处理策略
    pub fn with_treatment(mut self, treatment: WallTreatmentKind) -> Self {
        self.treatment = treatment;
        self
    }

    /// 设置累加策略
    pub fn with_strategy(mut self, strategy: AccumulationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 壁面片元
    #[inline]
    pub fn patch(&self) -> &WallPatch {
        &self.patch
    }

    /// 模型系数
    #[inline]
    pub fn coeffs(&self) -> &WallFunctionCoeffs {
        &self.coeffs
    }

    /// 缓存的层流底层 y+ 阈值
    #[inline]
    pub fn y_plus_lam(&self) -> Scalar {
        self.y_plus_lam
    }

    /// 当前处理策略标签
    #[inline]
    pub fn treatment_kind(&self) -> WallTreatmentKind {
        self.treatment
    }

    /// 计算逐面约束并加权累加进调用方缓冲
    ///
    /// `samples` 与片元面一一对应（同序同长）。每面贡献按角权
    /// 缩放后 `+=` 到所属单元；缓冲不清零，允许多边界累加。
    ///
    /// # 错误
    /// - 采样数与面数不符: [`TwError::SizeMismatch`]
    /// - 面的单元索引超出缓冲范围: [`TwError::IndexOutOfBounds`]
    pub fn calculate(
        &self,
        samples: &[FaceSample],
        buffers: &mut WallFieldBuffers,
    ) -> TwResult<()> {
        TwError::check_size("face_samples", self.patch.len(), samples.len())?;
        for face in self.patch.faces() {
            TwError::check_index("Cell", face.cell, buffers.n_cells())?;
        }

        let treatment = self.treatment.treatment();
        if self.strategy.use_parallel(self.patch.len()) {
            evaluate_parallel(
                treatment,
                &self.coeffs,
                self.y_plus_lam,
                &self.patch,
                samples,
                buffers,
            );
        } else {
            evaluate_serial(
                treatment,
                &self.coeffs,
                self.y_plus_lam,
                &self.patch,
                samples,
                buffers,
            );
        }

        Ok(())
    }

    /// 按映射构造：把本求值器移植到新面集
    ///
    /// 网格加密/分解后使用。系数与缓存阈值逐位复制、不重新计算；
    /// 面几何经 `mapper` 从旧片元复制或按序取自 `fresh`
    /// （见 [`WallPatch::mapped`]）。
    pub fn construct_by_mapping(
        &self,
        mapper: &FaceMapper,
        fresh: &[WallFace],
    ) -> TwResult<Self> {
        Ok(Self {
            patch: self.patch.mapped(mapper, fresh)?,
            ..self.clone()
        })
    }
}

// ============================================================
// 测试
// ============================================================
