//! 图片批量重命名 & 命名转换命令行
//!
//! ```bash
//! image-renamer convert "用户头像"             # 六种命名风格
//! image-renamer filename --prefix icon --module 通用 --ext .png
//! image-renamer rename ./assets --module 首页 --dry-run
//! image-renamer config show
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use image_renamer_lib::naming::CaseStyle;
use image_renamer_lib::rename::{self, ImageItem, ProgressData};
use image_renamer_lib::RenamerApp;

#[derive(Parser)]
#[command(name = "image-renamer")]
#[command(about = "按 prefix_module_feature.ext 规则批量重命名图片，并提供命名风格转换")]
#[command(version)]
struct Cli {
    /// 配置文件路径（默认位于系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 不访问远程翻译，仅使用词汇表
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 将文本转换为六种命名风格
    Convert {
        text: String,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 生成单个文件名
    Filename {
        #[arg(long)]
        prefix: String,
        #[arg(long)]
        module: String,
        #[arg(long, default_value = "")]
        feature: String,
        #[arg(long)]
        ext: String,
    },
    /// 批量重命名图片（参数可以是文件或文件夹）
    Rename {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// 类型前缀，默认取配置中的第一项
        #[arg(long)]
        prefix: Option<String>,
        /// 模块名，默认取配置中的第一项
        #[arg(long)]
        module: Option<String>,
        /// 功能名，默认取文件名中的汉字
        #[arg(long)]
        feature: Option<String>,
        /// 输出目录（复制到该目录）；默认使用配置，未配置则原地重命名
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// 只显示新文件名，不修改文件
        #[arg(long)]
        dry_run: bool,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 输出图片的 data URL
    Preview { path: PathBuf },
    /// 查看或修改配置
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// 显示当前配置
    Show,
    /// 显示配置文件路径
    Path,
    /// 设置模块列表
    SetModules { modules: Vec<String> },
    /// 设置类型列表
    SetTypes { types: Vec<String> },
    /// 设置输出目录，省略参数则恢复为原地重命名
    SetOutputDir { dir: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 日志输出到 stderr，stdout 只留结果
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = RenamerApp::load(cli.config, cli.offline)?;

    match cli.command {
        Commands::Convert { text, json } => {
            let result = app.convert_naming(&text).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for style in CaseStyle::ALL {
                    println!("{:<16} {}", style.display_name(), result.get(style));
                }
            }
        }
        Commands::Filename {
            prefix,
            module,
            feature,
            ext,
        } => {
            println!("{}", app.update_item(&prefix, &module, &feature, &ext).await);
        }
        Commands::Rename {
            paths,
            prefix,
            module,
            feature,
            output_dir,
            dry_run,
            json,
        } => {
            let mut items = collect_items(&app, &paths).await?;
            if items.is_empty() {
                anyhow::bail!("未找到图片文件");
            }
            for item in &mut items {
                apply_overrides(&app, item, &prefix, &module, &feature).await;
            }

            if dry_run {
                if json {
                    println!("{}", serde_json::to_string_pretty(&items)?);
                } else {
                    for item in &items {
                        println!("{} -> {}", item.orig_name, item.new_name);
                    }
                }
                return Ok(());
            }

            let output_dir = output_dir.or_else(|| app.output_dir().map(PathBuf::from));
            let sink = |p: &ProgressData| {
                eprintln!("[{}/{}] {}", p.current, p.total, p.filename);
            };
            let report = rename::execute_rename(&items, output_dir.as_deref(), &sink)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
        }
        Commands::Preview { path } => {
            println!("{}", app.image_base64(&path)?);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(app.config())?);
            }
            ConfigAction::Path => {
                println!("{}", app.config_path().display());
            }
            ConfigAction::SetModules { modules } => {
                app.set_modules(modules)?;
                println!("{}", app.modules().join(", "));
            }
            ConfigAction::SetTypes { types } => {
                app.set_types(types)?;
                println!("{}", app.types().join(", "));
            }
            ConfigAction::SetOutputDir { dir } => {
                app.set_output_dir(dir)?;
                match app.output_dir() {
                    Some(dir) => println!("{}", dir.display()),
                    None => println!("(原目录)"),
                }
            }
        },
    }

    Ok(())
}

/// 文件夹展开为其中的图片，文件直接收集
async fn collect_items(app: &RenamerApp, paths: &[PathBuf]) -> Result<Vec<ImageItem>> {
    let mut items = Vec::new();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            items.extend(app.select_folder(path).await?);
        } else {
            files.push(path.clone());
        }
    }
    items.extend(app.select_files(&files).await);

    for (id, item) in items.iter_mut().enumerate() {
        item.id = id;
    }
    Ok(items)
}

/// 应用命令行指定的前缀/模块/功能名并重新生成文件名
async fn apply_overrides(
    app: &RenamerApp,
    item: &mut ImageItem,
    prefix: &Option<String>,
    module: &Option<String>,
    feature: &Option<String>,
) {
    if prefix.is_none() && module.is_none() && feature.is_none() {
        return;
    }
    if let Some(prefix) = prefix {
        item.prefix = prefix.clone();
    }
    if let Some(module) = module {
        item.module = module.clone();
    }
    if let Some(feature) = feature {
        item.feature_name = feature.clone();
    }
    item.new_name = app
        .update_item(&item.prefix, &item.module, &item.feature_name, &item.extension())
        .await;
}
