use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use molar_notes::{CaptureError, CaptureSession, SpeechSource};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PipelineArgs;
use crate::context::AppContext;
use crate::output::output;

/// Treats one line of a reader as a finished utterance.
struct LineSource<R>(R);

impl<R> SpeechSource for LineSource<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    async fn listen(self) -> Result<String, CaptureError> {
        let mut line = String::new();
        BufReader::new(self.0)
            .read_line(&mut line)
            .await
            .map_err(|error| CaptureError::Failed(error.to_string()))?;
        Ok(line)
    }
}

/// One line from `reader`, or `None` on a blank line, EOF, or when `limit`
/// runs out first.
async fn capture_line<R>(reader: R, limit: Duration) -> Option<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    CaptureSession::start(LineSource(reader))
        .finish_within(limit)
        .await
}

pub async fn run(
    timeout: Option<u64>,
    reference: Option<&Path>,
    pipeline: PipelineArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reference = ctx.reference(reference)?;
    let limit = Duration::from_secs(timeout.unwrap_or(ctx.config.notes.capture_timeout_secs));

    if std::io::stdin().is_terminal() && !flags.quiet {
        eprintln!("listening for one note ({}s)...", limit.as_secs());
    }

    let Some(heard) = capture_line(tokio::io::stdin(), limit).await else {
        anyhow::bail!("nothing was captured");
    };

    let outcome = ctx
        .pipeline(pipeline, flags.offline)
        .parse(&heard, &reference)
        .await;
    output(&outcome, flags.format)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::io::AsyncWriteExt;

    use super::capture_line;

    const LIMIT: Duration = Duration::from_secs(30);

    #[tokio::test]
    async fn first_line_is_the_note() {
        let input: &'static [u8] = b"  exo on 48 with Dr. Rao \nsecond line\n";
        assert_eq!(
            capture_line(input, LIMIT).await.as_deref(),
            Some("exo on 48 with Dr. Rao")
        );
    }

    #[tokio::test]
    async fn blank_line_captures_nothing() {
        let input: &'static [u8] = b"   \n";
        assert_eq!(capture_line(input, LIMIT).await, None);
    }

    #[tokio::test]
    async fn closed_input_captures_nothing() {
        let input: &'static [u8] = b"";
        assert_eq!(capture_line(input, LIMIT).await, None);
    }

    #[tokio::test]
    async fn line_written_later_is_still_heard() {
        let (reader, mut writer) = tokio::io::duplex(64);
        let capture = tokio::spawn(capture_line(reader, LIMIT));
        writer.write_all(b"rct molar\n").await.expect("write");
        assert_eq!(
            capture.await.expect("join").as_deref(),
            Some("rct molar")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn silent_input_times_out() {
        let (reader, _writer) = tokio::io::duplex(64);
        assert_eq!(capture_line(reader, Duration::from_secs(5)).await, None);
    }
}
