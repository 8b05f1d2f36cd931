use std::{
    future::Future,
    io::{BufRead, Write},
};

use stock::QuoteSource;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{Error, Flow, Session, display};

/// Read stdin on a plain thread so an interrupt never waits on a blocked read.
/// The channel closes on end-of-input.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("stdin: read failed err={:?}", e);
                    break;
                }
            }
        }
    });

    rx
}

/// Prompt, read, dispatch and print until `@exit`, end-of-input or `shutdown` fires.
/// Every way out prints the farewell line.
pub async fn run<Q, W>(
    session: &mut Session<Q>,
    lines: &mut mpsc::UnboundedReceiver<String>,
    shutdown: impl Future<Output = ()>,
    out: &mut W,
) -> Result<(), Error>
where
    Q: QuoteSource,
    W: Write,
{
    tokio::pin!(shutdown);

    writeln!(out, "{}", display::help())?;

    loop {
        write!(out, "{}", display::PROMPT)?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = &mut shutdown => None,
        };
        let Some(line) = line else {
            break;
        };

        let flow = tokio::select! {
            flow = session.handle_line(&line) => flow,
            _ = &mut shutdown => Flow::Exit,
        };

        match flow {
            Flow::Exit => break,
            Flow::Continue(Ok(outcome)) => writeln!(out, "{}", display::outcome(&outcome))?,
            Flow::Continue(Err(e)) => writeln!(out, "{}", display::parse_error(&e))?,
        }
    }

    writeln!(out, "\n{}", display::FAREWELL)?;
    out.flush()?;
    info!(tracked = session.registry().len(), "session ended");

    Ok(())
}
