use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use crate::cli::*;
use crate::matcher::DEFAULT_THRESHOLD;

static CONF_DIR: LazyLock<ConfDir> = LazyLock::new(|| {
    let path = ProjectDirs::from("", "facematch", "facematch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    ConfDir { path }
});

fn default_config_dir() -> &'static str {
    CONF_DIR.path().to_str().unwrap_or(".")
}

#[derive(Parser, Debug, Clone)]
pub struct MatchOptions {
    /// 匹配阈值（余弦相似度），最佳匹配低于该值时视为未匹配
    #[arg(long, value_name = "SCORE", default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: f32,
}

#[derive(Parser, Debug, Clone)]
pub struct EncoderOptions {
    /// 人脸特征提取服务地址，接收 multipart 字段 file，返回 {"embedding": [...]}
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:5000/represent")]
    pub encoder_url: String,
    /// 特征提取请求超时时间，单位为秒
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub encoder_timeout: u64,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "facematch", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    /// facematch 配置文件目录
    #[arg(short, long, default_value = default_config_dir())]
    pub conf_dir: ConfDir,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 启动 HTTP 服务
    Server(ServerCommand),
    /// 注册一张人脸图片
    Enroll(EnrollCommand),
    /// 在已注册的人脸中查找最佳匹配
    Verify(VerifyCommand),
    /// 查看数据库中的记录
    Show(ShowCommand),
    /// 导出所有特征向量到 CSV
    Export(ExportCommand),
    /// 导出某条记录的原始图片
    Dump(DumpCommand),
}

#[derive(Debug, Clone)]
pub struct ConfDir {
    path: PathBuf,
}

impl ConfDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// 返回数据库文件的路径
    pub fn database(&self) -> PathBuf {
        self.path.join("faces.db")
    }
}

impl FromStr for ConfDir {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl std::fmt::Display for ConfDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
