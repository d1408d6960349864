//! This module implements `PartialDateError`.

use std::{borrow::Cow, fmt};

use crate::Granularity;

/// `PartialDateError`'s error kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error kind for failures of the host environment.
    #[default]
    Generic,
    /// Error kind for input text that does not match its granularity.
    Parse,
    /// Error kind for unsupported arguments, such as an unknown granularity tag.
    InvalidArgument,
    /// Error kind for errors raised by the calendar engine.
    Calendar,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Parse => "ParseError",
            Self::InvalidArgument => "InvalidArgument",
            Self::Calendar => "CalendarError",
        })
    }
}

/// The error type for `partial_date`.
#[derive(Debug, Clone)]
pub struct PartialDateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    input: Option<Box<str>>,
    granularity: Option<Granularity>,
    source: Option<jiff::Error>,
}

impl PartialDateError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            input: None,
            granularity: None,
            source: None,
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a parse error for `input` at `granularity`.
    #[must_use]
    pub fn parse(input: &str, granularity: Granularity) -> Self {
        let mut err = Self::new(ErrorKind::Parse);
        err.input = Some(input.into());
        err.granularity = Some(granularity);
        err
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Wraps an error raised by the calendar engine.
    #[must_use]
    pub fn calendar(err: jiff::Error) -> Self {
        let mut this = Self::new(ErrorKind::Calendar);
        this.msg = Cow::Owned(err.to_string());
        this.source = Some(err);
        this
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Attaches the calendar engine error that caused this error.
    #[must_use]
    pub(crate) fn with_source(mut self, source: jiff::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the offending input string of a parse error.
    #[inline]
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Returns the granularity the input was parsed against.
    #[inline]
    #[must_use]
    pub fn granularity(&self) -> Option<Granularity> {
        self.granularity
    }
}

impl fmt::Display for PartialDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        match (&self.input, self.granularity) {
            (Some(input), Some(granularity)) => {
                write!(f, ": Invalid value for {granularity}: {input:?}")?;
                if !self.msg.is_empty() {
                    write!(f, " ({})", self.msg)?;
                }
            }
            _ if !self.msg.is_empty() => write!(f, ": {}", self.msg)?,
            _ => {}
        }

        Ok(())
    }
}

impl std::error::Error for PartialDateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl From<jiff::Error> for PartialDateError {
    fn from(err: jiff::Error) -> Self {
        Self::calendar(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, PartialDateError};
    use crate::Granularity;

    #[test]
    fn parse_error_display() {
        let err = PartialDateError::parse("not-a-week", Granularity::Week);
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.input(), Some("not-a-week"));
        assert_eq!(err.granularity(), Some(Granularity::Week));
        assert_eq!(
            err.to_string(),
            "ParseError: Invalid value for week: \"not-a-week\""
        );

        let err = err.with_message("week number out of range");
        assert_eq!(
            err.to_string(),
            "ParseError: Invalid value for week: \"not-a-week\" (week number out of range)"
        );
    }

    #[test]
    fn invalid_argument_display() {
        let err = PartialDateError::invalid_argument().with_message("unknown granularity tag");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.input(), None);
        assert_eq!(err.to_string(), "InvalidArgument: unknown granularity tag");
    }

    #[test]
    fn calendar_error_keeps_source() {
        use std::error::Error;

        let engine_err = jiff::civil::Date::new(2025, 2, 30).unwrap_err();
        let err = PartialDateError::from(engine_err);
        assert_eq!(err.kind(), ErrorKind::Calendar);
        assert!(err.source().is_some());
        assert!(!err.message().is_empty());
    }
}
