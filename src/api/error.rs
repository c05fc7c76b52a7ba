// ==========================================
// 仓储库存管理系统 - API 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("参数错误: {0}")]
    InvalidInput(String),

    #[error("记录未找到: {0}")]
    NotFound(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("导入错误: {0}")]
    ImportError(#[from] crate::importer::ImportError),

    #[error("导出错误: {0}")]
    ExportError(#[from] crate::export::ExportError),

    #[error("内部错误: {0}")]
    InternalError(String),
}

// 实现 From<RepositoryError>
impl From<crate::repository::RepositoryError> for ApiError {
    fn from(err: crate::repository::RepositoryError) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
