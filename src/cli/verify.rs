use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::Opts;
use crate::cli::{SubCommandExtend, open_service};
use crate::config::{EncoderOptions, MatchOptions};

#[derive(Parser, Debug, Clone)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub matching: MatchOptions,
    #[command(flatten)]
    pub encoder: EncoderOptions,
    /// 待验证的人脸图片
    pub image: PathBuf,
    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

impl SubCommandExtend for VerifyCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let image = tokio::fs::read(&self.image)
            .await
            .with_context(|| format!("无法读取图片: {}", self.image.display()))?;
        let service = open_service(opts, &self.encoder, self.matching.threshold).await?;
        let result = service.verify(&image, None).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }
        match result {
            Some(m) => println!("{:.4}\t{}\t{}", m.score, m.id, m.name),
            None => println!("no match"),
        }
        Ok(())
    }
}
