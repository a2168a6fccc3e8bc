pub mod transcode;

use std::io;

pub use transcode::{Input, TranscodeError, TranscodeStats};

/// Transcode the selected input to standard output.
///
/// The buffered stdout handle is flushed by the transcode before it returns.
pub fn run(input: &Input) -> transcode::types::Result<TranscodeStats> {
    let out = io::BufWriter::new(io::stdout().lock());

    match input {
        Input::Stdin => transcode::transcode(io::stdin().lock(), out),
        Input::File(path) => transcode::transcode_path(path, out),
    }
}
