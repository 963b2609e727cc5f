use thiserror::Error;

/// 特征向量解码错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 解压后的字节数不是 2 的倍数，无法解释为半精度浮点数组
    #[error("特征向量字节数 {0} 不是 2 的倍数")]
    OddLength(usize),
    /// zlib 流损坏或被截断
    #[error("特征向量解压失败: {0}")]
    Decompress(String),
}

/// 外部人脸特征提取错误
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("未检测到人脸: {0}")]
    NoFace(String),
    #[error("特征提取服务不可用: {0}")]
    Unavailable(String),
    #[error("特征提取服务返回了无效的特征向量: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("数据库错误: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("数据库迁移失败: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("匹配任务异常退出: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// 查询向量与已存储向量的维度不一致
    #[error("特征向量维度不一致: 查询为 {actual}，已存储为 {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// 特征向量的分量无法用有限的 f16 表示
    #[error("特征向量第 {index} 个分量不是有限值")]
    NonFinite { index: usize },
    #[error("匹配阈值必须是有限值: {0}")]
    InvalidThreshold(f32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
