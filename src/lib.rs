/*!
The `uniprop` crate provides the plumbing that connects a text shaping
engine to Unicode character property data: a shareable table of pluggable
property functions and the default horizontal direction of each Unicode
script.

This crate deliberately ships no Unicode property tables. Callers supply
their own property functions, typically backed by tables generated with
`ucd-generate`. An unconfigured table answers every query with a fixed
neutral value, so a partially configured engine keeps running instead of
failing.

A `PropertyFuncs` table is built mutable, populated, and then frozen before
it is shared. Freezing is one way: once frozen, the table's functions never
change again, which makes a frozen table safe to hand out to every corner
of a shaping pipeline.

# Example

Install a script classifier, freeze the table and query it:

```
use uniprop::{Direction, PropertyFuncs, Script};

fn classify(cp: u32) -> Script {
    match cp {
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF => Script::Arabic,
        _ => Script::Unknown,
    }
}

let funcs = PropertyFuncs::new();
funcs.set_script_fn(Some(classify));
funcs.freeze();

assert_eq!(funcs.script(0x05D0), Script::Hebrew);
assert_eq!(funcs.script(0x0627).horizontal_direction(), Direction::RightToLeft);
```
*/

#![deny(missing_docs)]

pub use crate::direction::{horizontal_direction, Direction};
pub use crate::error::ScriptNameError;
pub use crate::funcs::{
    CombiningClassFn, EastAsianWidthFn, GeneralCategoryFn, MirroringFn,
    PropertyFuncs, ScriptFn,
};
pub use crate::general_category::GeneralCategory;
pub use crate::script::Script;

mod direction;
mod error;
mod funcs;
mod general_category;
mod script;

/// A single Unicode codepoint.
///
/// This is a bare `u32` rather than `char` on purpose. Shaping pipelines
/// routinely ask about codepoints that are not Unicode scalar values, such
/// as unpaired surrogates found in malformed input, and property functions
/// must accept them. The functions in this crate never validate their
/// argument.
pub type Codepoint = u32;
