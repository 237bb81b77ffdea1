use std::{fs, path::PathBuf};

use tempfile::tempdir;

use plotann_cli::{Args, run};

/// Architecture used for every demo configuration.
const DEMO_ARCHITECTURE: &str = "3,4,4,2";

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// The demos directory at the workspace root.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(architecture: &str, output: PathBuf, config: Option<PathBuf>) -> Args {
    Args {
        architecture: architecture.to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
        ..Args::default()
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_path());
    assert!(!valid_demos.is_empty(), "No demo configurations found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args(DEMO_ARCHITECTURE, output_path.clone(), Some(demo_path.clone()));

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG written");
                assert_eq!(svg.matches("<circle").count(), 13, "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args(DEMO_ARCHITECTURE, output_path, Some(demo_path.clone()));

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_flags_without_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("flags.svg");

    let args = Args {
        bias: true,
        layer_labels: true,
        node_labels: true,
        edge_labels: true,
        node_colors: true,
        edge_colors: true,
        edge_from_border: true,
        ..args("2,3,1", output_path.clone(), None)
    };
    run(&args).expect("run succeeds");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert_eq!(svg.matches("<circle").count(), 6);
    // 2 * 2 bias-excluded edges, then 3 * 1 into the output layer
    assert_eq!(svg.matches("<line").count(), 7);
    assert!(svg.contains("Layer 1"));
}

#[test]
fn e2e_invalid_architectures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for architecture in ["", "2,0,1", "2,x", "3,-1"] {
        let output_path = temp_dir.path().join("invalid.svg");
        let args = args(architecture, output_path.clone(), None);
        assert!(run(&args).is_err(), "`{architecture}` should be rejected");
        assert!(!output_path.exists());
    }

}

#[test]
fn e2e_bias_only_hidden_layer() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("bias.svg");

    let args = Args {
        bias: true,
        ..args("2,1,2", output_path.clone(), None)
    };
    run(&args).expect("run succeeds");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert_eq!(svg.matches("<circle").count(), 5);
    assert_eq!(svg.matches("<line").count(), 2);
}
