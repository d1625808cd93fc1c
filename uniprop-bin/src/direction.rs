use std::io::{self, Write};

use crate::args::ArgMatches;
use crate::error::Result;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let mut stdout = io::stdout();
    for script in args.scripts()? {
        writeln!(
            stdout,
            "{} {}",
            script.code(),
            script.horizontal_direction()
        )?;
    }
    Ok(())
}
