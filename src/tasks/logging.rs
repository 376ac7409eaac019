/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use log::{Level, LevelFilter};
use std::fmt;

const OUR_CRATES: &[&str] = &["matkit", "matkit_kernel", "matkit_tasks"];

/// Install the global logger, writing to stderr.
///
/// Each level of `verbosity` makes matkit's own crates one step chattier.
///
/// NOTE: Calling this twice is an error, as `log` only permits one logger.
pub fn init_global_logger(verbosity: u64) -> FailResult<()> {
    use std::time::Instant;

    let ours = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let start = Instant::now();
    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!(
                "[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message,
            ))
        })
        .level(LevelFilter::Info);

    for &name in OUR_CRATES {
        dispatch = dispatch.level_for(name, ours);
    }

    // stdout is reserved for results
    dispatch.chain(::std::io::stderr()).apply()?;
    Ok(())
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
