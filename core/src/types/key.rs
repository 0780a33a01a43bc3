use nutype::nutype;

pub const MAX_KEY_ID_LENGTH: usize = 64;

/// Identifier of one key position on the layout.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_KEY_ID_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct KeyId(String);
