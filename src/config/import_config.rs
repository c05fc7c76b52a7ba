// ==========================================
// 仓储库存管理系统 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口与内置默认实现
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 (key: {key}): {message}")]
    ReadError { key: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 默认列名别名（与源文件表头对齐，大小写敏感）
// ==========================================

/// 目标数量列名别名（按优先级排列，先命中者生效）
pub const DEFAULT_QUANTITY_COLUMNS: [&str; 4] =
    ["finalQuantity", "final_quantity", "quantity", "final"];

/// 物品 id 列名别名
pub const DEFAULT_ID_COLUMNS: [&str; 1] = ["id"];

/// 物品名称列名别名
pub const DEFAULT_NAME_COLUMNS: [&str; 1] = ["name"];

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的配置读取接口
// 实现者: StaticImportConfig（内置默认值）；测试中可 mock
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    /// 获取目标数量列名别名（按优先级排列）
    ///
    /// # 默认值
    /// - ["finalQuantity", "final_quantity", "quantity", "final"]
    async fn get_quantity_column_aliases(&self) -> ConfigResult<Vec<String>>;

    /// 获取物品 id 列名别名
    ///
    /// # 默认值
    /// - ["id"]
    async fn get_id_column_aliases(&self) -> ConfigResult<Vec<String>>;

    /// 获取物品名称列名别名
    ///
    /// # 默认值
    /// - ["name"]
    async fn get_name_column_aliases(&self) -> ConfigResult<Vec<String>>;
}

// ==========================================
// StaticImportConfig - 内置默认配置
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StaticImportConfig;

#[async_trait]
impl ImportConfigReader for StaticImportConfig {
    async fn get_quantity_column_aliases(&self) -> ConfigResult<Vec<String>> {
        Ok(DEFAULT_QUANTITY_COLUMNS
            .iter()
            .map(|s| s.to_string())
            .collect())
    }

    async fn get_id_column_aliases(&self) -> ConfigResult<Vec<String>> {
        Ok(DEFAULT_ID_COLUMNS.iter().map(|s| s.to_string()).collect())
    }

    async fn get_name_column_aliases(&self) -> ConfigResult<Vec<String>> {
        Ok(DEFAULT_NAME_COLUMNS.iter().map(|s| s.to_string()).collect())
    }
}
