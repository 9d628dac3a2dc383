//! Award collapsing.
//!
//! A person's raw award list may repeat codes, include codes that are not
//! ribbons, and hold several grades of the same order. [`collapse`] reduces
//! it to the list actually worn: precedence order, one entry per ribbon with
//! a repeat count, and only the most senior ribbon of each set.

use crate::ribbon::{Ribbon, RibbonEntry, SetTag};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Looks ribbons up by award code.
pub trait RibbonSource {
    /// The ribbon for `code`, if there is one.
    fn ribbon(&self, code: &str) -> Option<&Ribbon>;

    /// Whether `code` is a known award that has no ribbon (a citation, a
    /// certificate). Only affects logging.
    fn is_non_ribbon(&self, _code: &str) -> bool {
        false
    }
}

impl RibbonSource for HashMap<String, Ribbon> {
    fn ribbon(&self, code: &str) -> Option<&Ribbon> {
        self.get(code)
    }
}

/// Collapse raw award codes into precedence-ordered display entries.
///
/// Codes without a ribbon are dropped. Ribbons are stably sorted by order,
/// with unordered ribbons last; ties keep input order. Consecutive awards of
/// the same ribbon add to the last entry's count. A ribbon whose set already
/// has an entry is dropped; its further repeats still count toward that last
/// entry.
pub fn collapse<'a, S, I>(codes: I, source: &'a S) -> Vec<RibbonEntry<'a>>
where
    S: RibbonSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut ribbons: Vec<&'a Ribbon> = codes
        .into_iter()
        .filter_map(|code| {
            let code = code.as_ref();
            let ribbon = source.ribbon(code);
            if ribbon.is_none() {
                if source.is_non_ribbon(code) {
                    debug!(code, "Dropping award without a ribbon");
                } else {
                    debug!(code, "Dropping unknown award code");
                }
            }
            ribbon
        })
        .collect();
    // `sort_by_key` is stable.
    ribbons.sort_by_key(|ribbon| precedence(ribbon));

    let mut entries: Vec<RibbonEntry<'a>> = Vec::new();
    let mut claimed: HashSet<&'a SetTag> = HashSet::new();
    let mut previous: Option<&'a Ribbon> = None;

    for ribbon in ribbons {
        if previous.is_some_and(|last| std::ptr::eq(last, ribbon)) {
            if let Some(entry) = entries.last_mut() {
                entry.increment();
            }
        } else {
            match ribbon.set() {
                Some(set) if !claimed.insert(set) => {
                    debug!(code = ribbon.code(), %set, "Set already shown, dropping ribbon");
                }
                _ => entries.push(RibbonEntry::new(ribbon)),
            }
        }
        previous = Some(ribbon);
    }
    entries
}

/// Sort key: ordered ribbons ascending, unordered ribbons after all of them.
fn precedence(ribbon: &Ribbon) -> (bool, u32) {
    match ribbon.order() {
        Some(order) => (false, order),
        None => (true, 0),
    }
}
