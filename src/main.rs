use clap::Parser;
use cutlist::core::ConfigProvider;
use cutlist::domain::model::LayoutReport;
use cutlist::utils::{logger, validation::Validate};
use cutlist::{CliConfig, CutEngine, CutError, GenerationPipeline, JobConfig, LocalStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cutlist");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入 TOML 工作檔
    let job_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading job file from: {}", path);
            match JobConfig::from_file(path).and_then(|job| job.validate().map(|_| job)) {
                Ok(job) => {
                    if let Some(name) = job.name() {
                        tracing::info!("📋 Job: {}", name);
                    }
                    Some(job)
                }
                Err(e) => {
                    eprintln!("❌ Failed to load job file '{}'", path);
                    fail(&e)
                }
            }
        }
        None => None,
    };

    let settings = config.settings(job_config.as_ref());
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let source = match config.part_source(job_config.as_ref()) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::new(settings.output_dir().to_string());
    let pipeline = GenerationPipeline::new(storage, settings.clone(), source);
    let engine = CutEngine::new(pipeline);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        match engine.plan() {
            Ok(report) => display_plan(&report, &settings),
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    match engine.run() {
        Ok(artifacts) => {
            tracing::info!("✅ Cut files generated for job {}", artifacts.job_id);
            println!("✅ Generated {} cut(s)", artifacts.instance_count);
            println!("📐 SVG layout: {}", artifacts.svg_path.display());
            println!("🛠️ G-code: {}", artifacts.gcode_path.display());
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &CutError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn display_plan(report: &LayoutReport, settings: &cutlist::GenerationSettings) {
    println!("📋 Layout plan for job {}:", report.job_id);
    println!(
        "  Sheet: {}x{} ({} x {}), wrap at {}",
        settings.layout.canvas_width,
        settings.layout.canvas_height,
        settings.layout.physical_width,
        settings.layout.physical_height,
        settings.layout.sheet_width
    );
    println!("  Output: {}/{{{}, {}}}", settings.output_dir, settings.svg_filename, settings.gcode_filename);
    println!("  G-code coordinates: {:?}", settings.coordinate_mode);
    println!();

    for placed in &report.placements {
        println!(
            "  {:<16} at ({}, {}) size {}x{}",
            placed.name, placed.x, placed.y, placed.width, placed.height
        );
    }

    println!();
    println!(
        "  {} instance(s) in {} row(s), final cursor ({}, {})",
        report.placements.len(),
        report.rows,
        report.final_cursor.0,
        report.final_cursor.1
    );
    if report.overflowing > 0 {
        println!("  ⚠️ {} instance(s) extend past the sheet height", report.overflowing);
    }
}
