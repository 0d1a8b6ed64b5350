// crates/tw_physics/src/boundary/wall/accumulate.rs

//! 壁面贡献加权累加
//!
//! 本模块提供逐面输出向单元场的归约路径：
//! - WallFieldBuffers: 调用方持有的产生率/耗散率累加缓冲
//! - AccumulationStrategy: 串行 / 收集后累加 / 自动
//!
//! # 归约语义
//!
//! 累加是可交换、可结合的加权求和，多个壁面边界条件可以向同一
//! 缓冲累加，求值互相独立。并行路径采用收集后累加：先并行计算
//! 各面输出（真正并行），再按片元面序串行累加。同一面序下串行
//! 与并行结果逐位一致；改变面序只在浮点结合性范围内改变结果。

use rayon::prelude::*;
use tw_foundation::Scalar;

use super::patch::{FaceSample, WallPatch};
use super::regime::{WallOutputs, WallTreatment};
use crate::types::WallFunctionCoeffs;

/// Auto 策略的最小并行面数（低于此值使用串行）
const DEFAULT_MIN_PARALLEL_SIZE: usize = 1000;

// ============================================================
// 累加策略
// ============================================================

/// 累加策略
///
/// - `Sequential`: 完全串行执行，适用于小片元
/// - `CollectThenAccumulate`: 先并行计算各面输出，后串行累加
/// - `Auto`: 根据面数自动选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulationStrategy {
    /// 串行执行
    Sequential,
    /// 收集后累加：并行计算输出 → 收集结果 → 串行累加
    CollectThenAccumulate,
    /// 自动选择（根据片元规模）
    #[default]
    Auto,
}

impl AccumulationStrategy {
    /// 是否走并行路径
    #[inline]
    pub fn use_parallel(&self, n_faces: usize) -> bool {
        match self {
            Self::Sequential => false,
            Self::CollectThenAccumulate => true,
            Self::Auto => n_faces >= DEFAULT_MIN_PARALLEL_SIZE,
        }
    }
}

// ============================================================
// 累加缓冲
// ============================================================

/// 壁面贡献累加缓冲
///
/// 按单元索引的产生率/耗散率归约缓冲，由求解器持有并在每个
/// 外迭代开始时清零；壁面函数求值只做 `+=` 累加，不清零。
#[derive(Debug, Clone)]
pub struct WallFieldBuffers {
    /// 湍流产生率 G [m²/s³]
    production: Vec<Scalar>,
    /// 耗散率 ε [m²/s³]
    dissipation: Vec<Scalar>,
}

impl WallFieldBuffers {
    /// 创建全零缓冲
    pub fn new(n_cells: usize) -> Self {
        Self {
            production: vec![0.0; n_cells],
            dissipation: vec![0.0; n_cells],
        }
    }

    /// 单元数
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.production.len()
    }

    /// 产生率场
    #[inline]
    pub fn production(&self) -> &[Scalar] {
        &self.production
    }

    /// 耗散率场
    #[inline]
    pub fn dissipation(&self) -> &[Scalar] {
        &self.dissipation
    }

    /// 清零（每个外迭代开始时由调用方执行）
    pub fn reset(&mut self) {
        self.production.fill(0.0);
        self.dissipation.fill(0.0);
    }

    /// 向单元累加一份（已加权的）面贡献
    #[inline]
    pub fn accumulate(&mut self, cell: usize, outputs: WallOutputs) {
        self.production[cell] += outputs.production;
        self.dissipation[cell] += outputs.dissipation;
    }
}

// ============================================================
// 求值路径
// ============================================================

/// 串行求值并累加
///
/// 片元与采样长度一致、单元索引在界内由调用方（求值器）预先校验。
pub(crate) fn evaluate_serial(
    treatment: &dyn WallTreatment,
    coeffs: &WallFunctionCoeffs,
    y_plus_lam: Scalar,
    patch: &WallPatch,
    samples: &[FaceSample],
    buffers: &mut WallFieldBuffers,
) {
    for (face, sample) in patch.faces().iter().zip(samples) {
        let outputs = treatment.evaluate_face(coeffs, y_plus_lam, face, sample);
        buffers.accumulate(face.cell, outputs.scaled(face.weight));
    }
}

/// 并行求值（收集后累加）
///
/// 各面输出互相独立，先并行计算；累加按片元面序串行执行，
/// 与串行路径逐位一致。
pub(crate) fn evaluate_parallel(
    treatment: &dyn WallTreatment,
    coeffs: &WallFunctionCoeffs,
    y_plus_lam: Scalar,
    patch: &WallPatch,
    samples: &[FaceSample],
    buffers: &mut WallFieldBuffers,
) {
    let face_results: Vec<(usize, WallOutputs)> = patch
        .faces()
        .par_iter()
        .zip(samples.par_iter())
        .map(|(face, sample)| {
            let outputs = treatment.evaluate_face(coeffs, y_plus_lam, face, sample);
            (face.cell, outputs.scaled(face.weight))
        })
        .collect();

    for (cell, outputs) in face_results {
        buffers.accumulate(cell, outputs);
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::wall::patch::WallFace;
    use crate::boundary::wall::regime::LowReWallTreatment;

    #[test]
    fn test_buffers_reset() {
        let mut buffers = WallFieldBuffers::new(3);
        buffers.accumulate(
            1,
            WallOutputs {
                production: 2.0,
                dissipation: 3.0,
            },
        );
        assert!((buffers.production()[1] - 2.0).abs() < 1e-15);

        buffers.reset();
        assert!(buffers.production().iter().all(|&v| v == 0.0));
        assert!(buffers.dissipation().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_buffers_accumulate_is_additive() {
        let mut buffers = WallFieldBuffers::new(2);
        let out = WallOutputs {
            production: 1.0,
            dissipation: 0.5,
        };
        buffers.accumulate(0, out);
        buffers.accumulate(0, out);
        assert!((buffers.production()[0] - 2.0).abs() < 1e-15);
        assert!((buffers.dissipation()[0] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_strategy_selection() {
        assert!(!AccumulationStrategy::Sequential.use_parallel(1_000_000));
        assert!(AccumulationStrategy::CollectThenAccumulate.use_parallel(1));
        assert!(!AccumulationStrategy::Auto.use_parallel(10));
        assert!(AccumulationStrategy::Auto.use_parallel(100_000));
    }

    #[test]
    fn test_serial_parallel_agree() {
        // 固定面序下串行与并行路径逐位一致
        let n_faces = 64;
        let faces: Vec<WallFace> = (0..n_faces)
            .map(|i| WallFace::new(i % 7, 0.001 + 0.0005 * i as Scalar, 1.0 / 3.0))
            .collect();
        let patch = WallPatch::new("walls", faces);
        let samples: Vec<FaceSample> = (0..n_faces)
            .map(|i| {
                FaceSample::new(
                    0.01 + 0.003 * i as Scalar,
                    1e-6,
                    1e-5 * (1.0 + i as Scalar),
                    2.0 + i as Scalar,
                )
            })
            .collect();

        let coeffs = WallFunctionCoeffs::default();
        let treatment = LowReWallTreatment;

        let mut serial = WallFieldBuffers::new(7);
        evaluate_serial(&treatment, &coeffs, 11.0, &patch, &samples, &mut serial);

        let mut parallel = WallFieldBuffers::new(7);
        evaluate_parallel(&treatment, &coeffs, 11.0, &patch, &samples, &mut parallel);

        for cell in 0..7 {
            assert_eq!(serial.production()[cell], parallel.production()[cell]);
            assert_eq!(serial.dissipation()[cell], parallel.dissipation()[cell]);
        }
    }
}
