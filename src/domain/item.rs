// ==========================================
// 仓储库存管理系统 - 库存物品领域模型
// ==========================================
// 用途: 库存主数据，导入层只修改 quantity 字段
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ItemStatus - 库存状态枚举
// ==========================================
// 派生规则: quantity == 0 → OutOfStock
//           quantity <= min_quantity → LowStock
//           其他 → InStock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "in-stock")]
    InStock, // 库存充足
    #[serde(rename = "low-stock")]
    LowStock, // 库存不足（低于安全库存）
    #[serde(rename = "out-of-stock")]
    OutOfStock, // 缺货
}

impl ItemStatus {
    /// 根据当前数量与安全库存派生状态
    pub fn derive(quantity: i64, min_quantity: i64) -> Self {
        if quantity <= 0 {
            ItemStatus::OutOfStock
        } else if quantity <= min_quantity {
            ItemStatus::LowStock
        } else {
            ItemStatus::InStock
        }
    }

    /// 状态的字符串表示（与存储列对齐）
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "in-stock",
            ItemStatus::LowStock => "low-stock",
            ItemStatus::OutOfStock => "out-of-stock",
        }
    }

    /// 从存储列解析状态（未知值按数量重新派生前的兜底: InStock）
    pub fn parse(value: &str) -> Self {
        match value {
            "out-of-stock" => ItemStatus::OutOfStock,
            "low-stock" => ItemStatus::LowStock,
            _ => ItemStatus::InStock,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// InventoryItem - 库存物品主数据
// ==========================================
// 红线: status 为派生字段，所有写入路径必须经 refresh_status 重新派生
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    // ===== 主键 =====
    pub item_id: String, // 物品唯一标识

    // ===== 基础信息 =====
    pub name: String,             // 物品名称
    pub quantity: i64,            // 当前库存数量（>= 0）
    pub min_quantity: i64,        // 安全库存阈值
    pub category: Option<String>, // 分类
    pub status: ItemStatus,       // 库存状态（派生）
    pub price: Option<f64>,       // 单价

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl InventoryItem {
    /// 创建新物品（状态按数量派生）
    pub fn new(
        item_id: String,
        name: String,
        quantity: i64,
        min_quantity: i64,
        category: Option<String>,
        price: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            item_id,
            name,
            quantity,
            min_quantity,
            category,
            status: ItemStatus::derive(quantity, min_quantity),
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// 按当前数量重新派生状态
    pub fn refresh_status(&mut self) {
        self.status = ItemStatus::derive(self.quantity, self.min_quantity);
    }

    /// 是否处于低库存（含缺货）
    pub fn is_below_min(&self) -> bool {
        matches!(self.status, ItemStatus::LowStock | ItemStatus::OutOfStock)
    }
}
