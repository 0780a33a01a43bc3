use nutype::nutype;

pub const DEFAULT_COLOR: &str = "white";

/// Display color of a key: a color name or a `#rrggbb` value from a picker.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
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
pub struct Color(String);
