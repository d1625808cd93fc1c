use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::general_category::GeneralCategory;
use crate::script::Script;
use crate::Codepoint;

/// The type of a `General_Category` property function.
pub type GeneralCategoryFn = fn(Codepoint) -> GeneralCategory;

/// The type of a `Canonical_Combining_Class` property function.
///
/// A combining class of `0` means the codepoint is not subject to
/// reordering during normalization.
pub type CombiningClassFn = fn(Codepoint) -> u8;

/// The type of a mirroring property function.
///
/// Given a codepoint, the function returns the codepoint whose glyph is
/// typically the mirror image of the original, e.g., `(` maps to `)`.
/// Codepoints with no mirror map to themselves.
pub type MirroringFn = fn(Codepoint) -> Codepoint;

/// The type of a `Script` property function.
pub type ScriptFn = fn(Codepoint) -> Script;

/// The type of an `East_Asian_Width` property function, in display
/// columns.
pub type EastAsianWidthFn = fn(Codepoint) -> u32;

/// The functions installed in a table, one per property.
///
/// Plain `fn` pointers keep this `Copy`, which is what makes `duplicate`
/// a straight bitwise copy of the source table's behavior.
#[derive(Clone, Copy)]
struct Slots {
    general_category: GeneralCategoryFn,
    combining_class: CombiningClassFn,
    mirroring: MirroringFn,
    script: ScriptFn,
    east_asian_width: EastAsianWidthFn,
}

impl Slots {
    const DEFAULT: Slots = Slots {
        general_category: default_general_category,
        combining_class: default_combining_class,
        mirroring: default_mirroring,
        script: default_script,
        east_asian_width: default_east_asian_width,
    };
}

fn default_general_category(_: Codepoint) -> GeneralCategory {
    GeneralCategory::OtherLetter
}

fn default_combining_class(_: Codepoint) -> u8 {
    0
}

fn default_mirroring(cp: Codepoint) -> Codepoint {
    cp
}

fn default_script(_: Codepoint) -> Script {
    Script::Unknown
}

fn default_east_asian_width(_: Codepoint) -> u32 {
    1
}

struct Core {
    immutable: AtomicBool,
    slots: RwLock<Slots>,
}

// The compiled in table behind `PropertyFuncs::inert`. It is born frozen,
// so its slots hold the defaults forever.
static INERT: Core = Core {
    immutable: AtomicBool::new(true),
    slots: RwLock::new(Slots::DEFAULT),
};

/// A shareable table of Unicode character property functions.
///
/// A table holds one function per supported property. Every slot starts
/// out holding a built in default that returns a fixed neutral value, so
/// a table answers every query from the moment it is created:
///
/// * general category: `Other_Letter`
/// * canonical combining class: `0`
/// * mirroring: the codepoint itself
/// * script: `Unknown`
/// * east asian width: `1`
///
/// Cloning a `PropertyFuncs` does not copy the table. A clone is a new
/// handle to the same table, and the table lives until the last handle is
/// dropped. Use `duplicate` to get an independent table with the same
/// functions.
///
/// A table starts out mutable. Calling `freeze` makes it permanently
/// immutable: from then on the setters silently do nothing. The intended
/// pattern is to build a table, freeze it, and only then share it. Setters
/// and queries are nonetheless safe to call from any thread at any time.
///
/// `PropertyFuncs::inert` returns a handle to a compiled in table that is
/// born frozen and permanently holds the defaults. It is useful where a
/// table is required but no real one is available.
#[derive(Clone)]
pub struct PropertyFuncs {
    core: CoreRef,
}

#[derive(Clone)]
enum CoreRef {
    Inert,
    Owned(Arc<Core>),
}

impl PropertyFuncs {
    /// Create a new mutable table with every slot holding its default
    /// function.
    pub fn new() -> PropertyFuncs {
        PropertyFuncs {
            core: CoreRef::Owned(Arc::new(Core {
                immutable: AtomicBool::new(false),
                slots: RwLock::new(Slots::DEFAULT),
            })),
        }
    }

    /// Return a handle to the inert table.
    ///
    /// The inert table is compiled into the program. It is permanently
    /// frozen, always answers queries with the default values, is never
    /// deallocated and does not participate in reference counting. Every
    /// call returns a handle to the same table.
    pub fn inert() -> PropertyFuncs {
        PropertyFuncs { core: CoreRef::Inert }
    }

    /// Returns true if and only if this handle refers to the inert table.
    pub fn is_inert(&self) -> bool {
        match self.core {
            CoreRef::Inert => true,
            CoreRef::Owned(_) => false,
        }
    }

    /// Create a new independent table whose slots are copied from this
    /// table.
    ///
    /// The new table is mutable even when this table is frozen or inert,
    /// and it starts with a reference count of its own.
    pub fn duplicate(&self) -> PropertyFuncs {
        let slots = *self.core().slots.read().unwrap();
        PropertyFuncs {
            core: CoreRef::Owned(Arc::new(Core {
                immutable: AtomicBool::new(false),
                slots: RwLock::new(slots),
            })),
        }
    }

    /// Return the number of live handles sharing this table, or `None`
    /// for the inert table, which is not reference counted.
    pub fn reference_count(&self) -> Option<usize> {
        match self.core {
            CoreRef::Inert => None,
            CoreRef::Owned(ref core) => Some(Arc::strong_count(core)),
        }
    }

    /// Make this table permanently immutable.
    ///
    /// After `freeze` returns, the setters silently do nothing, including
    /// setter calls racing with the freeze on other threads. Freezing an
    /// already frozen table, or the inert table, has no effect.
    pub fn freeze(&self) {
        let core = self.core();
        // Holding the write lock here means no setter is still applying a
        // change once the flag is visible.
        let _slots = core.slots.write().unwrap();
        core.immutable.store(true, Ordering::SeqCst);
    }

    /// Returns true if and only if this table has been frozen.
    ///
    /// The inert table is always frozen.
    pub fn is_frozen(&self) -> bool {
        self.core().immutable.load(Ordering::SeqCst)
    }

    /// Returns true if and only if both handles refer to the same table.
    pub fn ptr_eq(&self, other: &PropertyFuncs) -> bool {
        match (&self.core, &other.core) {
            (&CoreRef::Inert, &CoreRef::Inert) => true,
            (&CoreRef::Owned(ref a), &CoreRef::Owned(ref b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Install the given `General_Category` function, or restore the
    /// default on `None`. Does nothing if this table is frozen.
    pub fn set_general_category_fn(&self, f: Option<GeneralCategoryFn>) {
        self.set_slot(|slots| {
            slots.general_category = f.unwrap_or(default_general_category);
        });
    }

    /// Install the given `Canonical_Combining_Class` function, or restore
    /// the default on `None`. Does nothing if this table is frozen.
    pub fn set_combining_class_fn(&self, f: Option<CombiningClassFn>) {
        self.set_slot(|slots| {
            slots.combining_class = f.unwrap_or(default_combining_class);
        });
    }

    /// Install the given mirroring function, or restore the default on
    /// `None`. Does nothing if this table is frozen.
    pub fn set_mirroring_fn(&self, f: Option<MirroringFn>) {
        self.set_slot(|slots| {
            slots.mirroring = f.unwrap_or(default_mirroring);
        });
    }

    /// Install the given `Script` function, or restore the default on
    /// `None`. Does nothing if this table is frozen.
    pub fn set_script_fn(&self, f: Option<ScriptFn>) {
        self.set_slot(|slots| {
            slots.script = f.unwrap_or(default_script);
        });
    }

    /// Install the given `East_Asian_Width` function, or restore the
    /// default on `None`. Does nothing if this table is frozen.
    pub fn set_east_asian_width_fn(&self, f: Option<EastAsianWidthFn>) {
        self.set_slot(|slots| {
            slots.east_asian_width = f.unwrap_or(default_east_asian_width);
        });
    }

    /// Look up the `General_Category` of the given codepoint.
    pub fn general_category(&self, cp: Codepoint) -> GeneralCategory {
        let f = self.core().slots.read().unwrap().general_category;
        f(cp)
    }

    /// Look up the `Canonical_Combining_Class` of the given codepoint.
    pub fn combining_class(&self, cp: Codepoint) -> u8 {
        let f = self.core().slots.read().unwrap().combining_class;
        f(cp)
    }

    /// Look up the codepoint that mirrors the given codepoint. Codepoints
    /// with no mirror map to themselves.
    pub fn mirroring(&self, cp: Codepoint) -> Codepoint {
        let f = self.core().slots.read().unwrap().mirroring;
        f(cp)
    }

    /// Look up the `Script` of the given codepoint.
    pub fn script(&self, cp: Codepoint) -> Script {
        let f = self.core().slots.read().unwrap().script;
        f(cp)
    }

    /// Look up the `East_Asian_Width` of the given codepoint, in display
    /// columns.
    pub fn east_asian_width(&self, cp: Codepoint) -> u32 {
        let f = self.core().slots.read().unwrap().east_asian_width;
        f(cp)
    }

    fn core(&self) -> &Core {
        match self.core {
            CoreRef::Inert => &INERT,
            CoreRef::Owned(ref core) => core,
        }
    }

    fn set_slot<F: FnOnce(&mut Slots)>(&self, set: F) {
        let core = self.core();
        let mut slots = core.slots.write().unwrap();
        // The flag is checked under the write lock, so a freeze that has
        // completed can never be followed by a slot change.
        if core.immutable.load(Ordering::SeqCst) {
            return;
        }
        set(&mut slots);
    }
}

impl Default for PropertyFuncs {
    /// Equivalent to `PropertyFuncs::new`.
    fn default() -> PropertyFuncs {
        PropertyFuncs::new()
    }
}

impl fmt::Debug for PropertyFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyFuncs")
            .field("inert", &self.is_inert())
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::PropertyFuncs;
    use crate::general_category::GeneralCategory;
    use crate::script::Script;
    use crate::Codepoint;

    fn always_math(_: Codepoint) -> GeneralCategory {
        GeneralCategory::MathSymbol
    }

    fn always_arabic(_: Codepoint) -> Script {
        Script::Arabic
    }

    fn always_latin(_: Codepoint) -> Script {
        Script::Latin
    }

    fn swap_parens(cp: Codepoint) -> Codepoint {
        match cp {
            0x28 => 0x29,
            0x29 => 0x28,
            _ => cp,
        }
    }

    fn always_230(_: Codepoint) -> u8 {
        230
    }

    fn always_wide(_: Codepoint) -> u32 {
        2
    }

    #[test]
    fn fresh_table_uses_defaults() {
        let funcs = PropertyFuncs::new();
        assert!(!funcs.is_inert());
        assert!(!funcs.is_frozen());
        assert_eq!(funcs.general_category(0x41), GeneralCategory::OtherLetter);
        assert_eq!(funcs.combining_class(0x301), 0);
        assert_eq!(funcs.mirroring(0x28), 0x28);
        assert_eq!(funcs.script(0x41), Script::Unknown);
        assert_eq!(funcs.east_asian_width(0x4E00), 1);
    }

    #[test]
    fn set_and_restore_each_slot() {
        let funcs = PropertyFuncs::new();

        funcs.set_general_category_fn(Some(always_math));
        assert_eq!(funcs.general_category(0x41), GeneralCategory::MathSymbol);
        funcs.set_general_category_fn(None);
        assert_eq!(funcs.general_category(0x41), GeneralCategory::OtherLetter);

        funcs.set_combining_class_fn(Some(always_230));
        assert_eq!(funcs.combining_class(0x301), 230);
        funcs.set_combining_class_fn(None);
        assert_eq!(funcs.combining_class(0x301), 0);

        funcs.set_mirroring_fn(Some(swap_parens));
        assert_eq!(funcs.mirroring(0x28), 0x29);
        assert_eq!(funcs.mirroring(0x29), 0x28);
        assert_eq!(funcs.mirroring(0x41), 0x41);
        funcs.set_mirroring_fn(None);
        assert_eq!(funcs.mirroring(0x28), 0x28);

        funcs.set_script_fn(Some(always_arabic));
        assert_eq!(funcs.script(0x41), Script::Arabic);
        funcs.set_script_fn(None);
        assert_eq!(funcs.script(0x41), Script::Unknown);

        funcs.set_east_asian_width_fn(Some(always_wide));
        assert_eq!(funcs.east_asian_width(0x4E00), 2);
        funcs.set_east_asian_width_fn(None);
        assert_eq!(funcs.east_asian_width(0x4E00), 1);
    }

    #[test]
    fn freeze_stops_all_changes() {
        let funcs = PropertyFuncs::new();
        funcs.set_mirroring_fn(Some(swap_parens));
        funcs.freeze();
        assert!(funcs.is_frozen());

        funcs.set_general_category_fn(Some(always_math));
        funcs.set_combining_class_fn(Some(always_230));
        funcs.set_mirroring_fn(None);
        funcs.set_script_fn(Some(always_arabic));
        funcs.set_east_asian_width_fn(Some(always_wide));

        assert_eq!(funcs.general_category(0x41), GeneralCategory::OtherLetter);
        assert_eq!(funcs.combining_class(0x301), 0);
        assert_eq!(funcs.mirroring(0x28), 0x29);
        assert_eq!(funcs.script(0x41), Script::Unknown);
        assert_eq!(funcs.east_asian_width(0x4E00), 1);
    }

    #[test]
    fn freeze_is_idempotent() {
        let funcs = PropertyFuncs::new();
        funcs.freeze();
        funcs.freeze();
        assert!(funcs.is_frozen());
    }

    #[test]
    fn clones_share_the_table() {
        let funcs = PropertyFuncs::new();
        let other = funcs.clone();
        assert!(funcs.ptr_eq(&other));
        funcs.set_script_fn(Some(always_arabic));
        assert_eq!(other.script(0x41), Script::Arabic);
    }

    #[test]
    fn reference_count_round_trip() {
        let funcs = PropertyFuncs::new();
        assert_eq!(funcs.reference_count(), Some(1));
        let extra = funcs.clone();
        assert_eq!(funcs.reference_count(), Some(2));
        assert_eq!(extra.reference_count(), Some(2));
        drop(extra);
        assert_eq!(funcs.reference_count(), Some(1));
    }

    #[test]
    fn duplicate_copies_slots() {
        let funcs = PropertyFuncs::new();
        funcs.set_script_fn(Some(always_arabic));

        let copy = funcs.duplicate();
        assert!(!funcs.ptr_eq(&copy));
        assert_eq!(copy.script(0x41), Script::Arabic);
        assert_eq!(funcs.reference_count(), Some(1));
        assert_eq!(copy.reference_count(), Some(1));

        // Changing the copy leaves the original alone and vice versa.
        copy.set_script_fn(None);
        assert_eq!(copy.script(0x41), Script::Unknown);
        assert_eq!(funcs.script(0x41), Script::Arabic);
    }

    #[test]
    fn duplicate_of_frozen_is_mutable() {
        let funcs = PropertyFuncs::new();
        funcs.set_combining_class_fn(Some(always_230));
        funcs.freeze();

        let copy = funcs.duplicate();
        assert!(!copy.is_frozen());
        assert_eq!(copy.combining_class(0x301), 230);
        copy.set_combining_class_fn(None);
        assert_eq!(copy.combining_class(0x301), 0);
    }

    #[test]
    fn frozen_copy_keeps_its_functions() {
        let funcs = PropertyFuncs::new();
        funcs.set_script_fn(Some(always_arabic));

        let copy = funcs.duplicate();
        copy.freeze();
        copy.set_script_fn(Some(always_latin));
        assert_eq!(copy.script(0x41), Script::Arabic);

        // The source table is still mutable.
        assert!(!funcs.is_frozen());
        funcs.set_script_fn(Some(always_latin));
        assert_eq!(funcs.script(0x41), Script::Latin);
        assert_eq!(copy.script(0x41), Script::Arabic);
    }

    #[test]
    fn inert_is_frozen_and_uncounted() {
        let funcs = PropertyFuncs::inert();
        assert!(funcs.is_inert());
        assert!(funcs.is_frozen());
        assert_eq!(funcs.reference_count(), None);

        let extra = funcs.clone();
        assert!(funcs.ptr_eq(&extra));
        assert_eq!(extra.reference_count(), None);
        drop(extra);

        funcs.set_east_asian_width_fn(Some(always_wide));
        assert_eq!(funcs.east_asian_width(0x4E00), 1);
        funcs.freeze();
        assert!(funcs.is_frozen());
    }

    #[test]
    fn inert_handles_are_the_same_table() {
        assert!(PropertyFuncs::inert().ptr_eq(&PropertyFuncs::inert()));
        assert!(!PropertyFuncs::new().ptr_eq(&PropertyFuncs::inert()));
    }

    #[test]
    fn duplicate_of_inert_is_normal() {
        let copy = PropertyFuncs::inert().duplicate();
        assert!(!copy.is_inert());
        assert!(!copy.is_frozen());
        assert_eq!(copy.reference_count(), Some(1));
        copy.set_combining_class_fn(Some(always_230));
        assert_eq!(copy.combining_class(0x301), 230);
    }

    #[test]
    fn share_across_threads() {
        let funcs = PropertyFuncs::new();
        funcs.set_combining_class_fn(Some(always_230));

        let mut handles = vec![];
        for _ in 0..4 {
            let funcs = funcs.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(funcs.combining_class(0x301), 230);
                }
                funcs.freeze();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(funcs.is_frozen());
        assert_eq!(funcs.reference_count(), Some(1));
        assert_eq!(funcs.combining_class(0x301), 230);
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PropertyFuncs>();
    }
}
