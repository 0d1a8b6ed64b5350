// crates/tw_physics/src/boundary/wall/patch.rs

//! 壁面片元与逐面数据
//!
//! 本模块定义壁面求值的几何与采样数据结构：
//! - WallFace: 单面拓扑/几何（所属单元、壁距、角权）
//! - WallPatch: 命名边界区域的面集合（纯索引，不嵌入网格指针）
//! - FaceSample: 逐面瞬态场采样（每个求解器外迭代重建）
//! - FaceMapper: 面集重映射（网格加密/分解后的映射构造）
//! - corner_weights: 多面单元的角权归一化
//!
//! # 角权
//!
//! 近壁单元可能被多个壁面面包围（网格角点处）。每面贡献按角权
//! 缩放后累加，权重取该单元壁面面数的倒数，避免重复计入。

use glam::DVec2;
use tw_foundation::{Scalar, TwError, TwResult};

// ============================================================
// 壁面面
// ============================================================

/// 壁面面信息
///
/// 描述单个壁面面的拓扑与几何。几何量在网格拓扑变化时由映射
/// 构造重取，不在求值期间修改。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFace {
    /// 所属单元索引
    pub cell: usize,

    /// 壁面法向距离 y [m]
    pub distance: Scalar,

    /// 角权（非负，多面单元归一化用）
    pub weight: Scalar,
}

impl WallFace {
    /// 创建新的壁面面信息
    #[inline]
    pub fn new(cell: usize, distance: Scalar, weight: Scalar) -> Self {
        Self {
            cell,
            distance,
            weight,
        }
    }
}

// ============================================================
// 壁面片元
// ============================================================

/// 壁面片元：命名边界区域的面集合
///
/// 面以平坦数组存放，按索引寻址；与网格结构的耦合只剩
/// `WallFace::cell` 中的单元索引。
#[derive(Debug, Clone, PartialEq)]
pub struct WallPatch {
    /// 片元名称（用于标识和查找）
    name: String,
    /// 面集合
    faces: Vec<WallFace>,
}

impl WallPatch {
    /// 创建壁面片元
    pub fn new(name: impl Into<String>, faces: Vec<WallFace>) -> Self {
        Self {
            name: name.into(),
            faces,
        }
    }

    /// 片元名称
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 面集合
    #[inline]
    pub fn faces(&self) -> &[WallFace] {
        &self.faces
    }

    /// 面数
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// 按映射构造新片元
    ///
    /// 网格加密/分解后，旧片元的面通过 `mapper` 映射到新面集：
    /// 被映射的面复制旧几何，插入面（映射为 `None` 的槽位）按序
    /// 取自 `fresh`（来自新网格上下文的几何）。
    ///
    /// # 错误
    /// - 映射引用的旧面索引越界: [`TwError::IndexOutOfBounds`]
    /// - `fresh` 长度与插入槽位数不符: [`TwError::SizeMismatch`]
    pub fn mapped(&self, mapper: &FaceMapper, fresh: &[WallFace]) -> TwResult<Self> {
        let insertions = mapper.insertion_count();
        TwError::check_size("fresh_faces", insertions, fresh.len())?;

        let mut faces = Vec::with_capacity(mapper.len());
        let mut fresh_iter = fresh.iter();

        for slot in mapper.addressing() {
            match slot {
                Some(old) => {
                    TwError::check_index("WallFace", *old, self.faces.len())?;
                    faces.push(self.faces[*old]);
                }
                None => {
                    // 插入数已校验，迭代器不会提前耗尽
                    if let Some(face) = fresh_iter.next() {
                        faces.push(*face);
                    }
                }
            }
        }

        Ok(Self {
            name: self.name.clone(),
            faces,
        })
    }
}

// ============================================================
// 逐面采样
// ============================================================

/// 逐面瞬态场采样
///
/// 每个求解器外迭代由调用方从当前场状态重建。壁距与角权属于
/// 片元几何，不在此重复。近零粘性等奇异输入按前置条件处理，
/// 产生的 IEEE 特殊值原样传播。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSample {
    /// 相邻单元湍动能 k [m²/s²]
    pub k: Scalar,

    /// 层流运动粘性 ν [m²/s]
    pub nu: Scalar,

    /// 湍流粘性 ν_t [m²/s]
    pub nu_t: Scalar,

    /// 壁面法向速度梯度模 |∂U/∂n| [1/s]
    pub mag_grad_u: Scalar,
}

impl FaceSample {
    /// 创建采样（不可压缩，直接给运动粘性）
    #[inline]
    pub fn new(k: Scalar, nu: Scalar, nu_t: Scalar, mag_grad_u: Scalar) -> Self {
        Self {
            k,
            nu,
            nu_t,
            mag_grad_u,
        }
    }

    /// 创建采样（可压缩，动力粘性与密度在此换算 ν = μ/ρ）
    #[inline]
    pub fn compressible(
        k: Scalar,
        mu: Scalar,
        rho: Scalar,
        nu_t: Scalar,
        mag_grad_u: Scalar,
    ) -> Self {
        Self::new(k, mu / rho, nu_t, mag_grad_u)
    }

    /// 由单元/壁面速度向量构造
    ///
    /// 速度梯度模取一阶差分 |U_c - U_w| / y。
    #[inline]
    pub fn from_velocities(
        k: Scalar,
        nu: Scalar,
        nu_t: Scalar,
        u_cell: DVec2,
        u_wall: DVec2,
        distance: f64, // ALLOW_F64: 与 DVec2 几何数据配合
    ) -> Self {
        let mag_grad_u = ((u_cell - u_wall).length() / distance) as Scalar;
        Self::new(k, nu, nu_t, mag_grad_u)
    }
}

// ============================================================
// 角权计算
// ============================================================

/// 计算并写回角权
///
/// 对共享网格上的一组壁面片元：统计每个单元被多少壁面面包围，
/// 每面角权取该计数的倒数。单面单元权重为 1，角点双面单元各 0.5。
///
/// # 错误
/// 任一面的单元索引不小于 `n_cells` 时返回
/// [`TwError::IndexOutOfBounds`]。
pub fn corner_weights(patches: &mut [WallPatch], n_cells: usize) -> TwResult<()> {
    let mut counts = vec![0usize; n_cells];

    for patch in patches.iter() {
        for face in patch.faces() {
            TwError::check_index("Cell", face.cell, n_cells)?;
            counts[face.cell] += 1;
        }
    }

    for patch in patches.iter_mut() {
        for face in patch.faces.iter_mut() {
            face.weight = 1.0 / counts[face.cell] as Scalar;
        }
    }

    Ok(())
}

// ============================================================
// 面集映射
// ============================================================

/// 面集重映射
///
/// 新面集中每个槽位要么映射自旧面索引，要么为插入（`None`）。
/// 映射可以是部分的：未被引用的旧面即被丢弃。
#[derive(Debug, Clone)]
pub struct FaceMapper {
    /// addressing[new] = Some(old) 或 None（插入）
    addressing: Vec<Option<usize>>,
}

impl FaceMapper {
    /// 由寻址表创建
    pub fn new(addressing: Vec<Option<usize>>) -> Self {
        Self { addressing }
    }

    /// 恒等映射
    pub fn identity(len: usize) -> Self {
        Self {
            addressing: (0..len).map(Some).collect(),
        }
    }

    /// 新面集大小
    #[inline]
    pub fn len(&self) -> usize {
        self.addressing.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.addressing.is_empty()
    }

    /// 寻址表
    #[inline]
    pub fn addressing(&self) -> &[Option<usize>] {
        &self.addressing
    }

    /// 插入槽位数
    #[inline]
    pub fn insertion_count(&self) -> usize {
        self.addressing.iter().filter(|slot| slot.is_none()).count()
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn three_face_patch() -> WallPatch {
        WallPatch::new(
            "bottom",
            vec![
                WallFace::new(0, 0.01, 1.0),
                WallFace::new(1, 0.02, 1.0),
                WallFace::new(2, 0.03, 1.0),
            ],
        )
    }

    #[test]
    fn test_patch_basic() {
        let patch = three_face_patch();
        assert_eq!(patch.name(), "bottom");
        assert_eq!(patch.len(), 3);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_sample_compressible() {
        // ν = μ/ρ
        let s = FaceSample::compressible(0.5, 1.8e-5, 1.2, 1e-4, 10.0);
        assert!((s.nu - 1.5e-5).abs() < 1e-18);
    }

    #[test]
    fn test_sample_from_velocities() {
        let s = FaceSample::from_velocities(
            0.5,
            1e-6,
            1e-4,
            DVec2::new(3.0, 4.0),
            DVec2::ZERO,
            0.01,
        );
        // |U_c - U_w| = 5.0, 梯度模 = 500
        assert!((s.mag_grad_u - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_weights_shared_cell() {
        // 单元 0 被两个面包围，各得 0.5；单元 1 单面得 1.0
        let mut patches = vec![WallPatch::new(
            "walls",
            vec![
                WallFace::new(0, 0.01, 0.0),
                WallFace::new(0, 0.01, 0.0),
                WallFace::new(1, 0.02, 0.0),
            ],
        )];

        corner_weights(&mut patches, 4).unwrap();

        let faces = patches[0].faces();
        assert!((faces[0].weight - 0.5).abs() < 1e-15);
        assert!((faces[1].weight - 0.5).abs() < 1e-15);
        assert!((faces[2].weight - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_corner_weights_across_patches() {
        // 同一单元的两个面分属不同片元，权重仍按总数归一
        let mut patches = vec![
            WallPatch::new("west", vec![WallFace::new(3, 0.01, 0.0)]),
            WallPatch::new("south", vec![WallFace::new(3, 0.01, 0.0)]),
        ];

        corner_weights(&mut patches, 8).unwrap();

        assert!((patches[0].faces()[0].weight - 0.5).abs() < 1e-15);
        assert!((patches[1].faces()[0].weight - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_corner_weights_cell_out_of_bounds() {
        let mut patches = vec![WallPatch::new("bad", vec![WallFace::new(10, 0.01, 0.0)])];
        assert!(corner_weights(&mut patches, 4).is_err());
    }

    #[test]
    fn test_mapper_identity() {
        let patch = three_face_patch();
        let mapped = patch.mapped(&FaceMapper::identity(3), &[]).unwrap();
        assert_eq!(mapped, patch);
    }

    #[test]
    fn test_mapper_subset_and_insertion() {
        let patch = three_face_patch();
        // 新面集：旧面 2、插入面、旧面 0
        let mapper = FaceMapper::new(vec![Some(2), None, Some(0)]);
        let fresh = [WallFace::new(7, 0.05, 1.0)];

        let mapped = patch.mapped(&mapper, &fresh).unwrap();
        assert_eq!(mapped.len(), 3);
        assert_eq!(mapped.faces()[0].cell, 2);
        assert_eq!(mapped.faces()[1].cell, 7);
        assert_eq!(mapped.faces()[2].cell, 0);
    }

    #[test]
    fn test_mapper_errors() {
        let patch = three_face_patch();

        // 旧索引越界
        let mapper = FaceMapper::new(vec![Some(5)]);
        assert!(patch.mapped(&mapper, &[]).is_err());

        // 插入面数量不符
        let mapper = FaceMapper::new(vec![None, None]);
        let fresh = [WallFace::new(0, 0.01, 1.0)];
        assert!(patch.mapped(&mapper, &fresh).is_err());
    }
}
