use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum_typed_multipart::TypedMultipart;
use log::info;

use super::error::Result;
use super::state::AppState;
use super::types::*;

/// 注册一张人脸图片
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RegisterResponse),
        (status = 422, description = "图片中没有检测到人脸"),
    )
)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    data: TypedMultipart<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    info!("注册人脸: {}, 图片大小 {} 字节", data.name, data.file.len());
    let id = state.service.enroll(&data.name, &data.file).await?;
    Ok(Json(RegisterResponse { status: "ok".to_string(), id }))
}

/// 在已注册的人脸中查找最佳匹配
#[utoipa::path(
    post,
    path = "/verify",
    request_body(content = VerifyForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = VerifyResponse),
        (status = 422, description = "图片中没有检测到人脸"),
        (status = 400, description = "阈值不是有限值，或特征向量维度与已注册的不一致"),
    )
)]
pub async fn verify_handler(
    State(state): State<Arc<AppState>>,
    data: TypedMultipart<VerifyRequest>,
) -> Result<Json<VerifyResponse>> {
    info!("验证人脸, 图片大小 {} 字节", data.file.len());
    let face = state.service.verify(&data.file, data.threshold).await?;
    Ok(Json(VerifyResponse { face }))
}
