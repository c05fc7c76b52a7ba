// ==========================================
// 仓储库存管理系统 - CSV 导出器
// ==========================================
// 规则: 表头 + 每记录一行；所有字段（含表头）双引号包裹，
//       内嵌引号按双写转义；空输入产出零字节而非错误
// ==========================================

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 序列化失败: {0}")]
    CsvError(#[from] csv::Error),

    #[error("CSV 写出失败: {0}")]
    WriteError(String),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

/// 将同构记录序列导出为 CSV 字节流
///
/// # 参数
/// - records: 记录序列（字段集一致，表头取自结构体字段名）
///
/// # 返回
/// - Ok(Vec<u8>): CSV 内容；records 为空时为零字节（不写表头）
pub fn export_records<S: Serialize>(records: &[S]) -> ExportResult<Vec<u8>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::WriteError(e.to_string()))
}
