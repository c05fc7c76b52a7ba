// ==========================================
// 仓储库存管理系统 - 对账导入领域模型
// ==========================================
// 用途: 导入管道中间产物与导入结果
// 生命周期: 仅在一次导入流程内（日志随结果返回，不落库）
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// RawRow - 原始行记录
// ==========================================
// 用途: 文件解析输出（列名 → 单元格文本，均已 TRIM）
// 说明: 列名大小写敏感，与源文件表头一致
#[derive(Debug, Clone)]
pub struct RawRow {
    pub row_number: usize, // 原始文件行号（表头为第 0 行，数据行从 1 起）
    pub cells: HashMap<String, String>,
}

// ==========================================
// ImportRow - 标准化行
// ==========================================
// 用途: 行标准化输出，id/name 保留原始写法（匹配时才做大小写归一）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRow {
    pub row_number: usize,
    pub id: Option<String>,     // 物品 id（已 TRIM，非空）
    pub name: Option<String>,   // 物品名称（已 TRIM，非空）
    pub final_quantity: i64,    // 目标数量（小数截断取整）
}

// ==========================================
// NormalizedRow - 标准化结果
// ==========================================
// 红线: 缺少可解析目标数量的行是正常结果（Skip），不是错误
#[derive(Debug, Clone)]
pub enum NormalizedRow {
    /// 无可解析目标数量，跳过（不产生日志条目，仅计入汇总）
    Skip { row_number: usize },
    /// 有效行，进入匹配与对账
    Row(ImportRow),
}

// ==========================================
// RowStatus - 行终态枚举
// ==========================================
// 每个非跳过行恰好落入一个终态，终态之间互斥且不可重试
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    #[serde(rename = "updated")]
    Updated, // 匹配成功且远端更新成功
    #[serde(rename = "not found")]
    NotFound, // 未匹配到物品
    #[serde(rename = "failed")]
    Failed, // 远端更新返回空（被拒绝）
    #[serde(rename = "error")]
    Error, // 远端更新抛错（错误吞掉，仅记日志）
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Updated => "updated",
            RowStatus::NotFound => "not found",
            RowStatus::Failed => "failed",
            RowStatus::Error => "error",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// ImportLogEntry - 行结果日志
// ==========================================
// 用途: 每个非跳过行产生一条，按行遇到顺序返回给调用方
// 说明: 未匹配行的 initial/delta 不可知，置 None；id 沿用行内 id（缺失为空串）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLogEntry {
    #[serde(rename = "id")]
    pub item_id: String,
    pub name: String,
    pub initial: Option<i64>, // 更新调用前捕获的当前数量
    #[serde(rename = "final")]
    pub final_quantity: i64,
    pub delta: Option<i64>, // final − initial
    pub status: RowStatus,
}

// ==========================================
// QuantityUpdate - 数量更新意图
// ==========================================
// 用途: 纯对账阶段的输出，由执行阶段逐条落到仓储
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub item_id: String,
    pub new_quantity: i64,
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize, // 文件数据行总数
    pub updated: usize,
    pub not_found: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize, // 无可解析目标数量而跳过的行数
}

// ==========================================
// StockImportResult - 导入结果
// ==========================================
// 用途: 导入接口返回值（日志 + 汇总，不落库）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockImportResult {
    pub batch_id: String, // 批次 ID（UUID）
    pub file_name: Option<String>,
    pub log: Vec<ImportLogEntry>,
    pub summary: ImportSummary,
    pub imported_at: DateTime<Utc>,
    pub elapsed_time: std::time::Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_status_serde_rename() {
        // "not found" 带空格，依赖 serde rename 而非派生命名
        let json = serde_json::to_string(&RowStatus::NotFound).unwrap();
        assert_eq!(json, "\"not found\"");
    }

    #[test]
    fn test_log_entry_field_names() {
        let entry = ImportLogEntry {
            item_id: "1".to_string(),
            name: "Widget".to_string(),
            initial: Some(10),
            final_quantity: 15,
            delta: Some(5),
            status: RowStatus::Updated,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["final"], 15);
        assert_eq!(json["status"], "updated");
    }
}
