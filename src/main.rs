use anyhow::{Context, Result};
use console_quiz::utils::logging;
use console_quiz::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _result = App::initialize(config).await?.run().await?;

    Ok(())
}
