use std::io::{self, Write};

use uniprop::PropertyFuncs;

use crate::args::ArgMatches;
use crate::error::Result;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    // A fresh table holds only the built in defaults, which is exactly
    // what an engine sees before it installs property functions.
    let funcs = PropertyFuncs::new();
    let mut stdout = io::stdout();
    for cp in args.codepoints()? {
        writeln!(
            stdout,
            "U+{:04X} category={} combining-class={} mirror=U+{:04X} \
             script={} width={}",
            cp,
            funcs.general_category(cp).abbreviation(),
            funcs.combining_class(cp),
            funcs.mirroring(cp),
            funcs.script(cp).code(),
            funcs.east_asian_width(cp),
        )?;
    }
    Ok(())
}
