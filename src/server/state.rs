use std::sync::Arc;

use crate::FaceService;

/// 应用状态
pub struct AppState {
    /// 人脸注册和验证服务
    pub service: FaceService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(service: FaceService) -> Arc<Self> {
        Arc::new(AppState { service })
    }
}
