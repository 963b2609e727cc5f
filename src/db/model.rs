use sqlx::FromRow;

/// 人脸记录
#[derive(Debug, Clone, FromRow)]
pub struct FaceRecord {
    /// 记录 ID，自增
    pub id: i64,
    /// 注册时提供的名字，不要求唯一
    pub name: String,
    /// 编码后的特征向量，见 [`crate::codec`]
    pub embedding: Vec<u8>,
    /// 原始图片
    pub image: Vec<u8>,
    /// 创建时间，UTC，ISO-8601
    pub created_at: String,
}

/// 匹配时使用的记录，不包含图片
#[derive(Debug, Clone, FromRow)]
pub struct EmbeddingRecord {
    pub id: i64,
    pub name: String,
    pub embedding: Vec<u8>,
}

/// 用于检查数据库的记录摘要
#[derive(Debug, Clone, FromRow)]
pub struct FaceSummary {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub embedding: Vec<u8>,
    /// 图片字节数
    pub image_size: i64,
}
