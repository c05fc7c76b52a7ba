// ==========================================
// 仓储库存管理系统 - 行标准化器
// ==========================================
// 职责: 原始行 → 标准化行（导入阶段 1）
// 规则: 目标数量按别名优先级取第一个可解析值；
//       id 优先于 name 作为标识；两者均保留原始写法
// ==========================================

use crate::domain::import::{ImportRow, NormalizedRow, RawRow};

// ==========================================
// RowNormalizer - 行标准化器
// ==========================================
pub struct RowNormalizer {
    quantity_columns: Vec<String>,
    id_columns: Vec<String>,
    name_columns: Vec<String>,
}

impl RowNormalizer {
    /// 创建行标准化器
    ///
    /// # 参数
    /// - quantity_columns: 目标数量列名别名（按优先级排列）
    /// - id_columns: 物品 id 列名别名
    /// - name_columns: 物品名称列名别名
    pub fn new(
        quantity_columns: Vec<String>,
        id_columns: Vec<String>,
        name_columns: Vec<String>,
    ) -> Self {
        Self {
            quantity_columns,
            id_columns,
            name_columns,
        }
    }

    /// 标准化单行
    ///
    /// # 返回
    /// - NormalizedRow::Row: 目标数量可解析
    /// - NormalizedRow::Skip: 无可解析目标数量（正常结果，非错误）
    pub fn normalize(&self, row: &RawRow) -> NormalizedRow {
        let final_quantity = match self.extract_quantity(row) {
            Some(q) => q,
            None => {
                return NormalizedRow::Skip {
                    row_number: row.row_number,
                }
            }
        };

        NormalizedRow::Row(ImportRow {
            row_number: row.row_number,
            id: self.extract_cell(row, &self.id_columns),
            name: self.extract_cell(row, &self.name_columns),
            final_quantity,
        })
    }

    /// 按别名优先级提取目标数量，先命中者生效
    ///
    /// 空单元格与无法解析为数值的单元格均视为未命中，继续尝试下一别名。
    /// 小数向零截断（数量为整数口径）。
    fn extract_quantity(&self, row: &RawRow) -> Option<i64> {
        for column in &self.quantity_columns {
            let value = match row.cells.get(column) {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };

            if let Ok(q) = value.parse::<i64>() {
                return Some(q);
            }
            // Excel 数值单元格常带小数尾巴（如 "15.0"）
            if let Ok(f) = value.parse::<f64>() {
                if f.is_finite() {
                    return Some(f.trunc() as i64);
                }
            }
        }
        None
    }

    /// 按别名提取首个非空单元格（保留原始写法）
    fn extract_cell(&self, row: &RawRow, columns: &[String]) -> Option<String> {
        for column in columns {
            if let Some(v) = row.cells.get(column) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::import_config::{
        DEFAULT_ID_COLUMNS, DEFAULT_NAME_COLUMNS, DEFAULT_QUANTITY_COLUMNS,
    };
    use std::collections::HashMap;

    fn default_normalizer() -> RowNormalizer {
        RowNormalizer::new(
            DEFAULT_QUANTITY_COLUMNS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_ID_COLUMNS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_NAME_COLUMNS.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
        let mut cells = HashMap::new();
        for (k, v) in pairs {
            cells.insert(k.to_string(), v.to_string());
        }
        RawRow {
            row_number: 1,
            cells,
        }
    }

    #[test]
    fn test_final_quantity_takes_precedence_over_quantity() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("finalQuantity", "15"), ("quantity", "99")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => assert_eq!(r.final_quantity, 15),
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }

    #[test]
    fn test_snake_case_alias_fallback() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("final_quantity", "7"), ("name", "Widget")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => {
                assert_eq!(r.final_quantity, 7);
                assert_eq!(r.name.as_deref(), Some("Widget"));
            }
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }

    #[test]
    fn test_skip_when_no_quantity_column() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("id", "1"), ("name", "Widget")]);

        assert!(matches!(
            normalizer.normalize(&row),
            NormalizedRow::Skip { row_number: 1 }
        ));
    }

    #[test]
    fn test_empty_cell_falls_through_to_next_alias() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("finalQuantity", ""), ("quantity", "8")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => assert_eq!(r.final_quantity, 8),
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }

    #[test]
    fn test_non_numeric_cell_falls_through() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("finalQuantity", "abc"), ("final", "12")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => assert_eq!(r.final_quantity, 12),
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }

    #[test]
    fn test_float_truncated_toward_zero() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("quantity", "15.7")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => assert_eq!(r.final_quantity, 15),
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }

    #[test]
    fn test_id_and_name_preserved_verbatim() {
        let normalizer = default_normalizer();
        let row = raw_row(&[("id", " A-01 "), ("name", "  Widget  "), ("quantity", "5")]);

        match normalizer.normalize(&row) {
            NormalizedRow::Row(r) => {
                // TRIM 但不改变大小写
                assert_eq!(r.id.as_deref(), Some("A-01"));
                assert_eq!(r.name.as_deref(), Some("Widget"));
            }
            NormalizedRow::Skip { .. } => panic!("不应跳过"),
        }
    }
}
