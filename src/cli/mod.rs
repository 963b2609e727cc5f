mod dump;
mod enroll;
mod export;
pub mod server;
mod show;
mod verify;

use std::sync::Arc;

pub use dump::*;
pub use enroll::*;
pub use export::*;
pub use server::*;
pub use show::*;
pub use verify::*;

use crate::config::{EncoderOptions, Opts};
use crate::encoder::HttpEncoder;
use crate::{FaceDBBuilder, FaceService};

pub trait SubCommandExtend {
    fn run(&self, opts: &Opts) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

/// 打开数据库并连接特征提取服务
async fn open_service(
    opts: &Opts,
    encoder: &EncoderOptions,
    threshold: f32,
) -> anyhow::Result<FaceService> {
    let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
    let encoder = HttpEncoder::new(encoder)?;
    Ok(FaceService::new(db, Arc::new(encoder), threshold))
}
