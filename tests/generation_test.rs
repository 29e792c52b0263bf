use anyhow::Result;
use cutlist::core::presets::coffee_table;
use cutlist::{
    generate, CoordinateMode, CutEngine, CutError, CutJob, GenerationPipeline, GenerationSettings,
    LayoutSettings, LocalStorage, PartSource, PartSpec,
};
use tempfile::TempDir;
use uuid::Uuid;

fn storage_in(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_string_lossy().to_string())
}

fn settings_in(dir: &TempDir) -> GenerationSettings {
    GenerationSettings {
        output_dir: dir.path().to_string_lossy().to_string(),
        ..Default::default()
    }
}

#[test]
fn test_coffee_table_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = GenerationPipeline::new(
        storage_in(&temp_dir),
        settings_in(&temp_dir),
        PartSource::Preset("coffee-table".to_string()),
    );

    let artifacts = CutEngine::new(pipeline).run()?;
    assert_eq!(artifacts.instance_count, 9);
    assert_eq!(artifacts.svg_path, temp_dir.path().join("cut_layout.svg"));
    assert_eq!(artifacts.gcode_path, temp_dir.path().join("cut_output.gcode"));

    let svg = std::fs::read_to_string(&artifacts.svg_path)?;
    assert_eq!(svg.matches("<rect ").count(), 9);
    assert!(svg.contains("viewBox=\"0 0 1920 960\""));
    assert!(svg.contains(">Apron Short</text>"));

    let gcode = std::fs::read_to_string(&artifacts.gcode_path)?;
    let lines: Vec<&str> = gcode.lines().collect();
    assert_eq!(lines[0], format!("; G-code generated for job {}", artifacts.job_id));
    assert_eq!(lines.len(), 10);
    assert!(lines[1..].iter().all(|line| line.starts_with("G1 X320 Y100 ; Cutting ")));
    Ok(())
}

#[test]
fn test_rect_and_gcode_counts_equal_sum_of_quantities() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let parts = vec![
        PartSpec::new("Side", 2, 700.0, 300.0),
        PartSpec::new("Shelf", 5, 650.0, 250.0),
        PartSpec::new("Back", 1, 1200.0, 700.0),
        PartSpec::new("Dowel", 12, 10.0, 40.0),
    ];
    let job = CutJob::new(parts, "shelf.svg", "shelf.gcode");
    let artifacts = generate(
        &job,
        &storage_in(&temp_dir),
        &LayoutSettings::default(),
        CoordinateMode::FinalCursor,
    )?;

    let svg = std::fs::read_to_string(&artifacts.svg_path)?;
    let gcode = std::fs::read_to_string(&artifacts.gcode_path)?;
    assert_eq!(svg.matches("<rect ").count(), 20);
    assert_eq!(gcode.lines().skip(1).count(), 20);

    // every move carries the same final-cursor coordinates
    let coords: Vec<&str> = gcode
        .lines()
        .skip(1)
        .map(|line| line.split(" ; ").next().unwrap_or_default())
        .collect();
    assert!(coords.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[test]
fn test_per_instance_coordinates_follow_layout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = GenerationSettings {
        coordinate_mode: CoordinateMode::PerInstance,
        ..settings_in(&temp_dir)
    };
    let pipeline = GenerationPipeline::new(
        storage_in(&temp_dir),
        settings,
        PartSource::Parts(coffee_table()),
    );

    let artifacts = CutEngine::new(pipeline).run()?;
    let gcode = std::fs::read_to_string(&artifacts.gcode_path)?;
    let moves: Vec<&str> = gcode.lines().skip(1).collect();
    assert_eq!(moves[0], "G1 X0 Y0 ; Cutting Tabletop");
    assert_eq!(moves[7], "G1 X1700 Y0 ; Cutting Apron Short");
    assert_eq!(moves[8], "G1 X0 Y100 ; Cutting Apron Short");
    Ok(())
}

#[test]
fn test_regenerating_overwrites_with_identical_content() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = storage_in(&temp_dir);
    let job = CutJob::with_id(Uuid::nil(), coffee_table(), "cut_layout.svg", "cut_output.gcode");

    let first = generate(&job, &storage, &LayoutSettings::default(), CoordinateMode::FinalCursor)?;
    let svg_before = std::fs::read(&first.svg_path)?;
    let gcode_before = std::fs::read(&first.gcode_path)?;

    let second = generate(&job, &storage, &LayoutSettings::default(), CoordinateMode::FinalCursor)?;
    assert_eq!(first, second);
    assert_eq!(std::fs::read(&second.svg_path)?, svg_before);
    assert_eq!(std::fs::read(&second.gcode_path)?, gcode_before);

    // a fresh job id only changes the header line
    let fresh = CutJob::new(coffee_table(), "cut_layout.svg", "cut_output.gcode");
    generate(&fresh, &storage, &LayoutSettings::default(), CoordinateMode::FinalCursor)?;
    let gcode_after = std::fs::read_to_string(temp_dir.path().join("cut_output.gcode"))?;
    let before = String::from_utf8(gcode_before)?;
    assert_ne!(gcode_after.lines().next(), before.lines().next());
    assert!(gcode_after.lines().skip(1).eq(before.lines().skip(1)));
    Ok(())
}

#[test]
fn test_unparseable_prompt_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = GenerationPipeline::new(
        storage_in(&temp_dir),
        settings_in(&temp_dir),
        PartSource::Prompt("a tall bookshelf".to_string()),
    );

    let result = CutEngine::new(pipeline).run();
    assert!(matches!(result, Err(CutError::PromptNotUnderstood { .. })));
    assert!(!temp_dir.path().join("cut_layout.svg").exists());
    assert!(!temp_dir.path().join("cut_output.gcode").exists());
    Ok(())
}

#[test]
fn test_prompt_job_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = GenerationPipeline::new(
        storage_in(&temp_dir),
        settings_in(&temp_dir),
        PartSource::Prompt("2x2 ft coffee table with four 28-inch legs".to_string()),
    );

    let artifacts = CutEngine::new(pipeline).run()?;
    assert_eq!(artifacts.instance_count, 5);

    let gcode = std::fs::read_to_string(&artifacts.gcode_path)?;
    let moves: Vec<&str> = gcode.lines().skip(1).collect();
    // 480 + 20, then four legs at 60 + 20 each
    assert_eq!(moves[0], "G1 X820 Y0 ; Cutting Tabletop");
    assert_eq!(moves[4], "G1 X820 Y0 ; Cutting Leg");
    Ok(())
}

#[test]
fn test_plan_reports_layout_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = GenerationPipeline::new(
        storage_in(&temp_dir),
        settings_in(&temp_dir),
        PartSource::Parts(vec![PartSpec::new("Slab", 3, 1800.0, 400.0)]),
    );

    let report = CutEngine::new(pipeline).plan()?;
    assert_eq!(report.placements.len(), 3);
    assert_eq!(report.rows, 3);
    assert_eq!(report.final_cursor, (0.0, 1260.0));
    assert_eq!(report.overflowing, 1);
    assert!(std::fs::read_dir(temp_dir.path())?.next().is_none());
    Ok(())
}

#[test]
fn test_unwritable_output_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // a regular file where the output directory should be
    let blocker = temp_dir.path().join("blocked");
    std::fs::write(&blocker, b"")?;

    let storage = LocalStorage::new(blocker.to_string_lossy().to_string());
    let job = CutJob::new(coffee_table(), "cut_layout.svg", "cut_output.gcode");
    let result = generate(&job, &storage, &LayoutSettings::default(), CoordinateMode::FinalCursor);

    let err = result.unwrap_err();
    assert!(matches!(err, CutError::IoError(_)));
    assert_eq!(err.severity().exit_code(), 3);
    Ok(())
}
