use crate::invoker::{SpeakRequest, SpeakService};
use crate::{Error, Result};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Builds a [`SpeakRequest`] from positional arguments (program name already
/// stripped): the first is the context id, the rest form the input.
pub fn parse_args<I>(args: I) -> Result<SpeakRequest>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let context_id = args.next().ok_or(Error::MissingContextId)?;
    let input = args.collect::<Vec<_>>().join(" ");

    Ok(SpeakRequest { context_id, input })
}

/// Converts raw process arguments to strings, replacing bytes that are not
/// valid UTF-8 with U+FFFD.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// One full invocation: parse, send, then print status and body on their own
/// lines. Nothing is written to `out` unless the exchange completed.
pub async fn run<S, I, W>(service: &S, args: I, out: &mut W) -> Result<()>
where
    S: SpeakService + ?Sized,
    I: IntoIterator<Item = String>,
    W: Write,
{
    let request = parse_args(args)?;
    debug!(
        "Parsed request for context '{}' ({} chars of input)",
        request.context_id,
        request.input.len()
    );

    let response = service.speak(&request).await?;

    writeln!(out, "{response}")?;
    out.flush()?;

    Ok(())
}
