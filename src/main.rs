//! rsbotfilter 命令行入口
//! 加载两个数据集版本，按命令行给出的控件值过滤，输出排序后的机器人列表
//!
//! 运行命令：
//! rsbotfilter --name br --spoilers Spoilers --faction factionWarlord

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsbotfilter::{
    BotBrowser, CatalogLoader, ConfigManager, CustomConfigBuilder, DatasetVariant, FilterControls,
};

#[derive(Debug, Parser)]
#[command(name = "rsbotfilter", version, about = "过滤 Cogmind 机器人图鉴")]
struct Cli {
    /// JSON 配置文件
    #[arg(long)]
    config: Option<PathBuf>,
    /// 默认数据集 JSON
    #[arg(long)]
    default_catalog: Option<PathBuf>,
    /// 备选数据集 JSON
    #[arg(long)]
    alternate_catalog: Option<PathBuf>,
    /// 解析结果缓存目录
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// 使用备选数据集
    #[arg(long)]
    alternate: bool,
    /// 名称过滤
    #[arg(long, default_value = "")]
    name: String,
    /// 类别过滤
    #[arg(long, default_value = "")]
    class: String,
    /// 部件过滤
    #[arg(long, default_value = "")]
    part: String,
    /// 剧透等级：None / Spoilers / Redacted
    #[arg(long)]
    spoilers: Option<String>,
    /// 阵营按钮ID，例如 factionDerelict
    #[arg(long)]
    faction: Option<String>,
    /// 输出 JSON 条目而不是名称
    #[arg(long)]
    json: bool,
    /// 列出当前剧透等级下可选的阵营
    #[arg(long)]
    list_factions: bool,
    /// 详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ========== 1. 配置 ==========
    let base = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::get_default(),
    };
    let mut builder = CustomConfigBuilder::from_config(base);
    if let Some(path) = cli.default_catalog.clone() {
        builder = builder.default_catalog_path(path);
    }
    if let Some(path) = cli.alternate_catalog.clone() {
        builder = builder.alternate_catalog_path(path);
    }
    if cli.cache_dir.is_some() {
        builder = builder.cache_dir(cli.cache_dir.clone());
    }
    if cli.verbose {
        builder = builder.verbose(true);
    }
    let config = builder.build();

    // ========== 2. 日志系统初始化 ==========
    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    // ========== 3. 加载图鉴 ==========
    let start = Instant::now();
    let catalogs = CatalogLoader::load_all(&config)
        .await
        .context("加载机器人图鉴失败")?;
    info!("图鉴加载耗时：{:?}", start.elapsed());

    let browser = BotBrowser::new(&config, catalogs, DatasetVariant::from_flag(cli.alternate));
    let controls = FilterControls {
        name: cli.name,
        class: cli.class,
        part: cli.part,
        spoilers: cli.spoilers,
        faction_id: cli.faction,
    };
    let state = browser.filter_state(&controls);

    if cli.list_factions {
        for id in browser.visible_faction_ids(browser.faction_tier(&controls)) {
            let category = browser.factions().resolve(id).unwrap_or_default();
            println!("{}\t{}", id, category);
        }
        return Ok(());
    }

    // ========== 4. 过滤 + 排序 ==========
    let bots = browser.visible_bots(&state);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&bots)?);
    } else {
        for bot in &bots {
            println!("{}", bot);
        }
    }
    info!("共 {} 个机器人", bots.len());

    Ok(())
}
