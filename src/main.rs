use clap::Parser;
use facematch::Opts;
use facematch::cli::SubCommandExtend;
use facematch::config::SubCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().init();

    let opts = Opts::parse();

    match &opts.subcmd {
        SubCommand::Server(config) => config.run(&opts).await,
        SubCommand::Enroll(config) => config.run(&opts).await,
        SubCommand::Verify(config) => config.run(&opts).await,
        SubCommand::Show(config) => config.run(&opts).await,
        SubCommand::Export(config) => config.run(&opts).await,
        SubCommand::Dump(config) => config.run(&opts).await,
    }
}
