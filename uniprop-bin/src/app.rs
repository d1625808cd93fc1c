use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
uniprop is a tool for inspecting the script table and the property function
defaults provided by the uniprop crate.

The library itself ships no Unicode property data, so the values printed
here are the fixed fallbacks an engine sees before it installs its own
property functions, plus the built in script direction table.

Project home page: https://github.com/BurntSushi/uniprop";

const ABOUT_SCRIPTS: &'static str = "\
scripts lists every known script in canonical table order, one per line,
with its numeric value, ISO 15924 code, name and default horizontal
direction.
";

const ABOUT_DIRECTION: &'static str = "\
direction resolves the default horizontal direction of each given script.
Scripts are named by their ISO 15924 code, e.g., 'Arab' or 'latn'. Case
does not matter.

Scripts the direction table does not cover resolve to left to right.
";

const ABOUT_DEFAULTS: &'static str = "\
defaults prints, for each given codepoint, the property values an engine
sees before it installs any property functions of its own. Codepoints are
written in hex, with an optional U+ prefix, e.g., 'U+0627' or '627'.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    let cmd_scripts = SubCommand::with_name("scripts")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("List every known script with its default direction.")
        .before_help(ABOUT_SCRIPTS)
        .arg(
            Arg::with_name("rtl")
                .long("rtl")
                .help("Only list scripts that default to right to left."),
        );
    let cmd_direction = SubCommand::with_name("direction")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Resolve the default horizontal direction of a script.")
        .before_help(ABOUT_DIRECTION)
        .arg(
            Arg::with_name("script")
                .required(true)
                .multiple(true)
                .help("An ISO 15924 script code, e.g., Arab."),
        );
    let cmd_defaults = SubCommand::with_name("defaults")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print the default property values for codepoints.")
        .before_help(ABOUT_DEFAULTS)
        .arg(
            Arg::with_name("codepoint")
                .required(true)
                .multiple(true)
                .help("A codepoint in hex, e.g., U+0627."),
        );

    App::new("uniprop")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_scripts)
        .subcommand(cmd_direction)
        .subcommand(cmd_defaults)
}
