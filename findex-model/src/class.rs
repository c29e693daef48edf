use std::fmt;

/// The broad class a data file belongs to, as derived from its filename
/// convention. Determines which index table a record lives in and which
/// delete operation removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileClass {
    Science,
    Ancillary,
    Level0,
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileClass::Science => "science",
            FileClass::Ancillary => "ancillary",
            FileClass::Level0 => "level-0",
        };
        f.write_str(name)
    }
}
