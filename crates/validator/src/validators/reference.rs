//! Identifier and reference shapes.
//!
//! Only the format is checked. Whether the referenced record exists is
//! outside this crate.

use std::sync::LazyLock;

use regex::Regex;

use crate::combinators::{Each, each};
use crate::foundation::{IssueCode, error};

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static ENTITY_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

crate::rule! {
    /// 8-4-4-4-12 hexadecimal groups, any version.
    pub Uuid for str;
    rule(input) { UUID_REGEX.is_match(input) }
    issue(input, ctx) { error(IssueCode::ReferenceInvalidUuid, ctx, ()) }
    fn uuid();
}

crate::rule! {
    /// `type:uuid`, e.g. `contact:123e4567-e89b-12d3-a456-426614174000`.
    pub EntityRef for str;
    rule(input) { is_entity_ref(input) }
    issue(input, ctx) { error(IssueCode::ReferenceInvalidEntityRef, ctx, ()) }
    fn entity_ref();
}

fn is_entity_ref(input: &str) -> bool {
    input.split_once(':').is_some_and(|(entity_type, id)| {
        ENTITY_TYPE_REGEX.is_match(entity_type) && UUID_REGEX.is_match(id)
    })
}

/// An array of UUIDs. Each bad entry is reported at its index.
#[must_use]
pub fn uuid_array() -> Each<Uuid> {
    each(uuid())
}
