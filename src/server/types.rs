use axum::body::Bytes;
use axum_typed_multipart::TryFromMultipart;
use serde::Serialize;
use utoipa::ToSchema;

use crate::matcher::FaceMatch;

/// 注册请求参数
#[derive(TryFromMultipart)]
pub struct RegisterRequest {
    pub name: String,
    pub file: Bytes,
}

/// 注册表单（用于API文档）
#[derive(Debug, ToSchema)]
#[allow(unused)]
pub struct RegisterForm {
    /// 名字，不要求唯一
    pub name: String,
    /// 包含一张人脸的图片
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// 注册响应
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// 固定为 `ok`
    pub status: String,
    /// 新记录的 ID
    pub id: i64,
}

/// 验证请求参数
#[derive(TryFromMultipart)]
pub struct VerifyRequest {
    pub file: Bytes,
    pub threshold: Option<f32>,
}

/// 验证表单（用于API文档）
#[derive(Debug, ToSchema)]
#[allow(unused)]
pub struct VerifyForm {
    /// 待验证的人脸图片
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// 匹配阈值，默认使用服务启动时的配置
    pub threshold: Option<f32>,
}

/// 验证响应
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    /// 最佳匹配，没有达到阈值的记录时为 null
    #[serde(rename = "match")]
    pub face: Option<FaceMatch>,
}
