// ==========================================
// 喪葬擇日引擎 - 命令行入口
// ==========================================
// 子命令: lunar（单日黄历）、recommend（吉日推荐）、rituals（祭日计算）
// 输出: JSON（stdout，recommend 可选 --text 摘要），日志写 stderr
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mourning_almanac::api::{parse_date, parse_request_json, AlmanacApi};
use mourning_almanac::config::ConfigManager;
use mourning_almanac::logging;

#[derive(Parser)]
#[command(name = "mourning-almanac", version, about = "喪葬擇日：吉日推薦與做七日期計算")]
struct Cli {
    /// 配置文件路径（默认 {config_dir}/mourning-almanac/config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    json_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 查询单日黄历（YYYY-MM-DD）
    Lunar { date: String },
    /// 按请求文件推荐吉日（JSON）
    Recommend {
        request: PathBuf,
        /// 每个日期输出一行中文摘要，代替 JSON
        #[arg(long)]
        text: bool,
    },
    /// 计算做七、百日、對年
    Rituals {
        /// 歿日（YYYY-MM-DD）
        death_date: String,
        /// 快七（每三日一祭）
        #[arg(long, conflicts_with = "traditional")]
        compressed: bool,
        /// 每七日一祭
        #[arg(long)]
        traditional: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", mourning_almanac::APP_NAME, mourning_almanac::VERSION);

    let config = ConfigManager::load(cli.config.as_deref()).context("加载配置失败")?;
    let api = AlmanacApi::new(Arc::new(config));

    let output = match cli.command {
        Command::Lunar { date } => {
            let date = parse_date("日期", &date)?;
            serde_json::to_string_pretty(&api.lunar_info(date).await?)?
        }
        Command::Recommend { request, text } => {
            let raw = std::fs::read_to_string(&request)
                .with_context(|| format!("读取请求文件失败: {}", request.display()))?;
            let response = api.recommend_dates(parse_request_json(&raw)?).await?;
            if text {
                let mut lines: Vec<String> =
                    response.recommended_dates.iter().map(|a| a.summary()).collect();
                lines.push(response.overall_advice);
                lines.join("\n")
            } else {
                serde_json::to_string_pretty(&response)?
            }
        }
        Command::Rituals {
            death_date,
            compressed,
            traditional,
        } => {
            let death_date = parse_date("歿日", &death_date)?;
            let dates = match (compressed, traditional) {
                (true, _) => api.ritual_dates(death_date, false).await?,
                (false, true) => api.ritual_dates(death_date, true).await?,
                (false, false) => api.ritual_dates_default(death_date).await?,
            };
            serde_json::to_string_pretty(&dates)?
        }
    };

    println!("{}", output);
    Ok(())
}
