// ==========================================
// 仓储库存管理系统 - 数量对账器
// ==========================================
// 职责: 快照 + 标准化行 → 行解析结果与更新意图（导入阶段 3，纯函数）
// 红线: 不触碰仓储、不持有共享可变状态；快照由调用方传入，
//       更新意图由执行阶段逐条落库
// ==========================================

use crate::domain::import::{NormalizedRow, QuantityUpdate};
use crate::domain::item::InventoryItem;
use crate::importer::item_matcher::ItemMatcher;

// ==========================================
// RowResolution - 行解析结果
// ==========================================
// 说明: Matched 尚不是终态（终态取决于更新调用结果），
//       NotFound 已是终态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowResolution {
    /// 匹配到物品: initial 为更新调用前捕获的当前数量
    Matched {
        item_id: String,
        item_name: String,
        initial: i64,
        final_quantity: i64,
    },
    /// 未匹配到物品: 沿用行内 id/name（缺失为 None）
    NotFound {
        row_id: Option<String>,
        row_name: Option<String>,
        final_quantity: i64,
    },
}

impl RowResolution {
    /// delta = final − initial（未匹配行不可知）
    pub fn delta(&self) -> Option<i64> {
        match self {
            RowResolution::Matched {
                initial,
                final_quantity,
                ..
            } => Some(final_quantity - initial),
            RowResolution::NotFound { .. } => None,
        }
    }
}

// ==========================================
// Reconciler - 数量对账器
// ==========================================
pub struct Reconciler;

impl Reconciler {
    /// 解析全部标准化行
    ///
    /// # 参数
    /// - snapshot: 库存快照（顺序即匹配顺序）
    /// - rows: 标准化行列表
    ///
    /// # 返回
    /// - (Vec<RowResolution>, usize): 非跳过行的解析结果（保持行遇到顺序）
    ///   与跳过行数
    pub fn resolve_rows(
        snapshot: &[InventoryItem],
        rows: &[NormalizedRow],
    ) -> (Vec<RowResolution>, usize) {
        let mut resolutions = Vec::new();
        let mut skipped = 0;

        for row in rows {
            let import_row = match row {
                NormalizedRow::Skip { .. } => {
                    skipped += 1;
                    continue;
                }
                NormalizedRow::Row(r) => r,
            };

            match ItemMatcher::find_match(import_row, snapshot) {
                Some(item) => resolutions.push(RowResolution::Matched {
                    item_id: item.item_id.clone(),
                    item_name: item.name.clone(),
                    initial: item.quantity,
                    final_quantity: import_row.final_quantity,
                }),
                None => resolutions.push(RowResolution::NotFound {
                    row_id: import_row.id.clone(),
                    row_name: import_row.name.clone(),
                    final_quantity: import_row.final_quantity,
                }),
            }
        }

        (resolutions, skipped)
    }

    /// 提取更新意图（每个匹配行恰好一条，保持行顺序）
    pub fn planned_updates(resolutions: &[RowResolution]) -> Vec<QuantityUpdate> {
        resolutions
            .iter()
            .filter_map(|r| match r {
                RowResolution::Matched {
                    item_id,
                    final_quantity,
                    ..
                } => Some(QuantityUpdate {
                    item_id: item_id.clone(),
                    new_quantity: *final_quantity,
                }),
                RowResolution::NotFound { .. } => None,
            })
            .collect()
    }
}
