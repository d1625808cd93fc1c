use std::io::{self, Write};

use uniprop::{Direction, Script};

use crate::args::ArgMatches;
use crate::error::Result;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let rtl_only = args.is_present("rtl");
    let mut stdout = io::stdout();
    for &script in Script::ALL {
        let dir = script.horizontal_direction();
        if rtl_only && dir != Direction::RightToLeft {
            continue;
        }
        let name = format!("{:?}", script);
        writeln!(
            stdout,
            "{:>2} {} {:<21} {}",
            script as u16,
            script.code(),
            name,
            dir
        )?;
    }
    Ok(())
}
