// ==========================================
// 仓储库存管理系统 - 导出层
// ==========================================
// 职责: 记录序列 → CSV 字节流
// ==========================================

pub mod csv_exporter;

// 重导出核心类型
pub use csv_exporter::{export_records, ExportError, ExportResult};
