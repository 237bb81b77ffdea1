//! plotann CLI library
//!
//! This module contains the core CLI logic for the plotann network plotting tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use plotann::{Architecture, Decoration, LayoutOptions, PlotAnnError, PlotBuilder};

/// Run the plotann CLI application
///
/// This function lays out the network described by the command line and
/// writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `PlotAnnError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid architectures
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PlotAnnError> {
    info!(
        architecture = args.architecture,
        output_path = args.output;
        "Plotting network"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let architecture: Architecture = args.architecture.parse()?;
    debug!(layers = architecture.layer_count(); "Architecture parsed");

    let builder = PlotBuilder::from_config(&app_config)?;
    let options = apply_flags(builder.options().clone(), args);
    let builder = builder.with_options(options);

    let layout = builder.layout(&architecture)?;
    let svg = builder.render_svg(&layout)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Applies the command-line decoration flags on top of the configured options.
///
/// Flags only switch features on; an unset flag keeps the configured value.
fn apply_flags(mut options: LayoutOptions, args: &Args) -> LayoutOptions {
    if args.bias {
        options = options.with_bias(true);
    }
    if args.edge_from_border {
        options = options.with_edge_from_center(false);
    }
    if args.layer_labels {
        options = options.with_layer_labels(Decoration::Auto);
    }
    if args.node_labels {
        options = options.with_node_labels(Decoration::Auto);
    }
    if args.edge_labels {
        options = options.with_edge_labels(Decoration::Auto);
    }
    if args.node_colors {
        options = options.with_node_colors(Decoration::Auto);
    }
    if args.edge_colors {
        options = options.with_edge_colors(Decoration::Auto);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_keep_options() {
        let configured = LayoutOptions::default()
            .with_bias(true)
            .with_node_labels(Decoration::Explicit(vec!["a".to_string()]));
        let options = apply_flags(configured.clone(), &Args::default());
        assert_eq!(options, configured);
    }

    #[test]
    fn test_flags_enable_features() {
        let args = Args {
            bias: true,
            edge_from_border: true,
            node_labels: true,
            edge_colors: true,
            ..Args::default()
        };
        let options = apply_flags(LayoutOptions::default(), &args);

        assert!(options.bias());
        assert!(!options.edge_from_center());
        assert!(options.node_labels().is_auto());
        assert!(options.edge_colors().is_auto());
        assert!(options.layer_labels().is_off());
        assert!(options.node_colors().is_off());
    }
}
