//! Error adapter for converting PlotAnnError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use plotann::{LayoutError, PlotAnnError};

/// Adapter for a [`PlotAnnError`].
///
/// Errors carry no source spans; the adapter contributes a diagnostic code
/// and, where the fix is obvious, a help message.
pub struct ErrorAdapter<'a>(pub &'a PlotAnnError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlotAnnError::Io(_) => "plotann::io",
            PlotAnnError::Layout(err) if is_architecture_error(err) => "plotann::architecture",
            PlotAnnError::Layout(_) => "plotann::layout",
            PlotAnnError::Config(_) => "plotann::config",
            PlotAnnError::Export(_) => "plotann::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PlotAnnError::Layout(err) if is_architecture_error(err) => {
                "give the layer sizes as comma-separated positive integers, e.g. `2,3,1`"
            }
            PlotAnnError::Layout(LayoutError::InvalidCanvas(_)) => {
                "use finite, positive values for `width`, `height` and `radius`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn is_architecture_error(err: &LayoutError) -> bool {
    matches!(
        err,
        LayoutError::EmptyArchitecture
            | LayoutError::EmptyLayer { .. }
            | LayoutError::InvalidLayerSize { .. }
    )
}

/// Convert a [`PlotAnnError`] into a list of reportable errors.
pub fn to_reportables(err: &PlotAnnError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &PlotAnnError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes() {
        let io = PlotAnnError::Io(std::io::Error::other("disk full"));
        assert_eq!(code(&io).as_deref(), Some("plotann::io"));

        let arch = PlotAnnError::Layout(LayoutError::EmptyLayer { layer: 2 });
        assert_eq!(code(&arch).as_deref(), Some("plotann::architecture"));

        let layout = PlotAnnError::Layout(LayoutError::InvalidCanvas("radius".to_string()));
        assert_eq!(code(&layout).as_deref(), Some("plotann::layout"));

        let config = PlotAnnError::Config("bad".to_string());
        assert_eq!(code(&config).as_deref(), Some("plotann::config"));

        let export: PlotAnnError = plotann::export::Error::MissingOutput.into();
        assert_eq!(code(&export).as_deref(), Some("plotann::export"));
    }

    #[test]
    fn test_help_only_for_actionable_errors() {
        let arch = PlotAnnError::Layout(LayoutError::EmptyArchitecture);
        assert!(ErrorAdapter(&arch).help().is_some());

        let canvas = PlotAnnError::Layout(LayoutError::InvalidCanvas("radius".to_string()));
        assert!(ErrorAdapter(&canvas).help().is_some());

        let config = PlotAnnError::Config("bad".to_string());
        assert!(ErrorAdapter(&config).help().is_none());
    }

    #[test]
    fn test_non_diagnostic_error() {
        let err = PlotAnnError::Config("invalid color".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "Configuration error: invalid color"
        );
        assert!(reportables[0].labels().is_none());
    }
}
