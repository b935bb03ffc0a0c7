//! Error adapter for converting NirvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use nirviz::NirvizError;
use nirviz_parser::error::ParseError;

/// Adapter for a coded [`ParseError`].
pub struct ParseErrorAdapter<'a>(&'a ParseError);

impl<'a> ParseErrorAdapter<'a> {
    pub fn new(err: &'a ParseError) -> Self {
        Self(err)
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParseErrorAdapter").field(&self.0).finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.message())?;
        if let Some(location) = self.0.location() {
            write!(f, " (line {}, column {})", location.line(), location.column())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("nirviz::parse::{}", self.0.code())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.0
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for the remaining [`NirvizError`] variants.
///
/// These carry no position information, only a code and sometimes help text.
pub struct ErrorAdapter<'a>(pub &'a NirvizError);

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
            NirvizError::InputNotFound(_) => "nirviz::input",
            NirvizError::Io(_) => "nirviz::io",
            NirvizError::Parse(_) => "nirviz::parse",
            NirvizError::UnknownNode(_) => "nirviz::graph",
            NirvizError::Extraction(_) => "nirviz::extraction",
            NirvizError::Write { .. } => "nirviz::write",
            NirvizError::Export(_) => "nirviz::export",
            NirvizError::Config(_) => "nirviz::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            NirvizError::InputNotFound(_) => "check the model path",
            NirvizError::Extraction(_) => "an error diagram was written in place of the model",
            NirvizError::Config(_) => "see the [extraction] and [render] sections of config.toml",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A coded parse error with optional help.
    Parse(ParseErrorAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`NirvizError`] into a reportable error.
pub fn to_reportable(err: &NirvizError) -> Reportable<'_> {
    match err {
        NirvizError::Parse(parse_err) => Reportable::Parse(ParseErrorAdapter::new(parse_err)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use nirviz_parser::error::{ErrorCode, Location};

    use super::*;

    #[test]
    fn test_parse_error() {
        let parse_err = ParseError::new(ErrorCode::E200, "unknown node type `Spiky` for node `a`")
            .with_location(Location::new(3, 7))
            .with_help("use one of the NIR primitives");
        let err = NirvizError::from(parse_err);

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Parse(_)));
        assert_eq!(
            reportable.to_string(),
            "unknown node type `Spiky` for node `a` (line 3, column 7)"
        );
        assert_eq!(
            reportable.code().map(|c| c.to_string()),
            Some("nirviz::parse::E200".to_string())
        );
        assert_eq!(
            reportable.help().map(|h| h.to_string()),
            Some("use one of the NIR primitives".to_string())
        );
    }

    #[test]
    fn test_non_parse_error() {
        let err = NirvizError::InputNotFound(PathBuf::from("missing.nir"));

        let reportable = to_reportable(&err);
        match &reportable {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Input file not found: missing.nir");
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
        assert_eq!(
            reportable.code().map(|c| c.to_string()),
            Some("nirviz::input".to_string())
        );
    }

    #[test]
    fn test_extraction_error_has_help() {
        let err = NirvizError::Extraction("file not found".to_string());

        let reportable = to_reportable(&err);
        assert_eq!(
            reportable.to_string(),
            "Extraction failed: file not found"
        );
        assert!(reportable.help().is_some());
    }

    #[test]
    fn test_graphical_report_renders() {
        let err = NirvizError::Config("Missing configuration file: x.toml".to_string());

        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &to_reportable(&err))
            .expect("render");

        assert!(out.contains("nirviz::config"));
        assert!(out.contains("Missing configuration file"));
    }
}
