use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::Opts;
use crate::cli::{SubCommandExtend, open_service};
use crate::config::EncoderOptions;
use crate::matcher::DEFAULT_THRESHOLD;

#[derive(Parser, Debug, Clone)]
pub struct EnrollCommand {
    #[command(flatten)]
    pub encoder: EncoderOptions,
    /// 名字
    pub name: String,
    /// 包含一张人脸的图片
    pub image: PathBuf,
}

impl SubCommandExtend for EnrollCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let image = tokio::fs::read(&self.image)
            .await
            .with_context(|| format!("无法读取图片: {}", self.image.display()))?;
        let service = open_service(opts, &self.encoder, DEFAULT_THRESHOLD).await?;
        let id = service.enroll(&self.name, &image).await?;
        info!("注册成功");
        println!("{id}");
        Ok(())
    }
}
