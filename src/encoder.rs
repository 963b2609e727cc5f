//! 人脸特征提取。模型本身运行在外部服务中，这里只负责调用

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::debug;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::EncoderOptions;
use crate::error::ExtractionError;

/// 从图片中提取人脸特征向量
pub trait FaceEncoder: Send + Sync {
    /// 返回 L2 归一化后的特征向量，图片中没有人脸时返回 [`ExtractionError::NoFace`]
    fn encode<'a>(&'a self, image: &'a [u8]) -> BoxFuture<'a, Result<Vec<f32>, ExtractionError>>;
}

/// 将特征向量归一化为单位向量
pub fn normalize(mut v: Vec<f32>) -> Result<Vec<f32>, ExtractionError> {
    if v.is_empty() {
        return Err(ExtractionError::Invalid("特征向量为空".to_string()));
    }
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Err(ExtractionError::Invalid(format!("特征向量范数为 {norm}")));
    }
    v.iter_mut().for_each(|x| *x /= norm);
    Ok(v)
}

#[derive(Deserialize)]
struct EncodeResponse {
    embedding: Vec<f32>,
}

/// 通过 HTTP 调用外部特征提取服务
///
/// 请求为 multipart 表单，图片放在 `file` 字段中；
/// 服务返回 400/422 表示图片中没有可用的人脸。
pub struct HttpEncoder {
    client: reqwest::Client,
    url: String,
}

impl HttpEncoder {
    pub fn new(opts: &EncoderOptions) -> Result<Self, ExtractionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(opts.encoder_timeout))
            .build()
            .map_err(|e| ExtractionError::Unavailable(e.to_string()))?;
        Ok(Self { client, url: opts.encoder_url.clone() })
    }

    async fn request(&self, image: &[u8]) -> Result<Vec<f32>, ExtractionError> {
        let form = Form::new().part("file", Part::bytes(image.to_vec()).file_name("image"));
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractionError::Unavailable(e.to_string()))?;

        let status = response.status();
        debug!("特征提取服务返回: {}", status);
        match status {
            s if s.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.text().await.unwrap_or_default();
                return Err(ExtractionError::NoFace(body));
            }
            s => return Err(ExtractionError::Unavailable(format!("HTTP {s}"))),
        }

        let body = response
            .json::<EncodeResponse>()
            .await
            .map_err(|e| ExtractionError::Unavailable(format!("无法解析响应: {e}")))?;
        normalize(body.embedding)
    }
}

impl FaceEncoder for HttpEncoder {
    fn encode<'a>(&'a self, image: &'a [u8]) -> BoxFuture<'a, Result<Vec<f32>, ExtractionError>> {
        self.request(image).boxed()
    }
}
