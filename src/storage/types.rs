pub type Key = String;
pub type KeyRef<'a> = &'a str;
pub type Value = String;
