//! Core type definitions for the row transcoder
//!
//! Contains the dialect configuration shared by the reader and writer,
//! the run statistics, the input selection and the error enum.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Dialect Types
// ============================================================================

/// When the writer wraps a field in quote characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Quote only fields containing the delimiter, the quote character,
    /// `\r` or `\n`
    IfNeeded,
    /// Quote every field
    All,
}

/// Record terminator for a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\r\n` when writing; any of `\r`, `\n` or `\r\n` when reading
    Crlf,
    /// `\n` only
    Lf,
}

impl LineTerminator {
    /// The terminator native to the target platform.
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineTerminator::Crlf
        } else {
            LineTerminator::Lf
        }
    }

    /// The bytes written to end a line.
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            LineTerminator::Crlf => b"\r\n",
            LineTerminator::Lf => b"\n",
        }
    }

    fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

/// Delimiter, quoting and terminator rules for one side of the transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Field separator
    pub delimiter: u8,
    /// Character used to enclose fields; doubled to escape itself
    pub quote: u8,
    /// Quoting policy applied when writing
    pub quoting: Quoting,
    /// Record terminator
    pub terminator: LineTerminator,
}

/// Comma separated, double-quote enclosed input.
pub const EXCEL: Dialect = Dialect {
    delimiter: b',',
    quote: b'"',
    quoting: Quoting::IfNeeded,
    terminator: LineTerminator::Crlf,
};

/// Tab separated output using the platform line terminator.
pub const EXCEL_TAB: Dialect = Dialect {
    delimiter: b'\t',
    quote: b'"',
    quoting: Quoting::IfNeeded,
    terminator: LineTerminator::platform(),
};

impl Dialect {
    /// A reader builder for this dialect.
    ///
    /// Records may have any number of fields and the first row is data,
    /// not a header.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .flexible(true)
            .has_headers(false)
            .terminator(self.terminator.to_csv());
        builder
    }

    /// A writer builder for this dialect.
    pub fn writer_builder(&self) -> csv::WriterBuilder {
        let style = match self.quoting {
            Quoting::IfNeeded => csv::QuoteStyle::Necessary,
            Quoting::All => csv::QuoteStyle::Always,
        };

        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .quote_style(style)
            .flexible(true)
            .has_headers(false)
            .terminator(self.terminator.to_csv());
        builder
    }
}

// ============================================================================
// Run Types
// ============================================================================

/// Counts gathered over one transcode run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Records written
    pub rows: usize,
    /// Fields written across all records
    pub fields: usize,
}

/// Where the CSV input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file named on the command line
    File(PathBuf),
}

impl Input {
    /// Select the input from positional arguments, program name excluded.
    ///
    /// Zero arguments means stdin, one names a file. More than one is
    /// rejected.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let input = match args.next() {
            Some(path) => Input::File(PathBuf::from(path)),
            None => Input::Stdin,
        };

        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            return Err(TranscodeError::Usage {
                message: format!("unexpected arguments: {}", extra.join(" ")),
            });
        }

        Ok(input)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Typed error enum for transcode operations
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Command line did not match `csv2tsv [input-path]`
    #[error("Usage: csv2tsv [input-path] ({message})")]
    Usage { message: String },

    /// The input file could not be opened
    #[error("Failed to open '{path}': {source}")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or parse a CSV record
    #[error("Failed to read CSV: {message}")]
    ReadError { message: String },

    /// Failed to write a TSV record
    #[error("Failed to write TSV: {message}")]
    WriteError { message: String },
}

pub type Result<T> = std::result::Result<T, TranscodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_from_no_args_is_stdin() {
        let input = Input::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(input, Input::Stdin);
    }

    #[test]
    fn test_input_from_one_arg_is_file() {
        let input = Input::from_args(vec!["data.csv".to_string()]).unwrap();
        assert_eq!(input, Input::File(PathBuf::from("data.csv")));
    }

    #[test]
    fn test_input_rejects_extra_args() {
        let result = Input::from_args(vec!["a.csv".to_string(), "b.csv".to_string()]);
        match result {
            Err(TranscodeError::Usage { message }) => assert!(message.contains("b.csv")),
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_excel_tab_uses_platform_terminator() {
        assert_eq!(EXCEL_TAB.delimiter, b'\t');
        if cfg!(windows) {
            assert_eq!(EXCEL_TAB.terminator, LineTerminator::Crlf);
        } else {
            assert_eq!(EXCEL_TAB.terminator, LineTerminator::Lf);
        }
    }

    #[test]
    fn test_quote_all_dialect() {
        let dialect = Dialect {
            quoting: Quoting::All,
            terminator: LineTerminator::Lf,
            ..EXCEL_TAB
        };
        let mut writer = dialect.writer_builder().from_writer(Vec::new());
        writer.write_record(["a", "b"]).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "\"a\"\t\"b\"\n");
    }
}
