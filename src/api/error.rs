// ==========================================
// 矿区运输路线调度系统 - API层错误类型
// ==========================================
// 职责: 把导入层的技术错误收敛为对外错误分类
// 约定: 仅暴露 NotFound / ParseError 两类失败,
//       底层细节不外泄; 两类错误都不产生部分计划
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 数据源路径不存在
    #[error("数据源不存在: {0}")]
    NotFound(String),

    /// 数据源内容格式错误
    #[error("数据源解析失败: {0}")]
    ParseError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// 目的: 将导入层错误收敛为对外错误分类
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => ApiError::NotFound(path),
            ImportError::UnsupportedFormat(msg) => ApiError::ParseError(msg),
            ImportError::FileReadError(msg) => ApiError::ParseError(msg),
            ImportError::CsvParseError(msg) => ApiError::ParseError(msg),
            ImportError::ExcelParseError(msg) => ApiError::ParseError(msg),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
