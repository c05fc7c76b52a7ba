// ==========================================
// 仓储库存管理系统 - 物品匹配器
// ==========================================
// 职责: 标准化行 → 库存快照中的物品（导入阶段 2）
// 规则: id 精确匹配优先；否则名称 TRIM + 小写归一后相等；
//       快照顺序中的第一个匹配生效（同名物品不做消歧）
// ==========================================

use crate::domain::import::ImportRow;
use crate::domain::item::InventoryItem;

// ==========================================
// ItemMatcher - 物品匹配器
// ==========================================
pub struct ItemMatcher;

impl ItemMatcher {
    /// 在快照中解析行对应的物品
    ///
    /// # 参数
    /// - row: 标准化行
    /// - snapshot: 当前库存快照（顺序即匹配顺序）
    ///
    /// # 返回
    /// - Some(&InventoryItem): 第一个匹配的物品
    /// - None: 未匹配（含行内既无 id 也无 name 的情况）
    pub fn find_match<'a>(
        row: &ImportRow,
        snapshot: &'a [InventoryItem],
    ) -> Option<&'a InventoryItem> {
        // id 匹配优先于名称匹配，即使行内同时带有 name
        if let Some(ref id) = row.id {
            return snapshot.iter().find(|item| item.item_id == *id);
        }

        if let Some(ref name) = row.name {
            let normalized = Self::normalize_name(name);
            return snapshot
                .iter()
                .find(|item| Self::normalize_name(&item.name) == normalized);
        }

        None
    }

    /// 名称归一: TRIM + 小写
    fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
