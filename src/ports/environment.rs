/// Port for reading process environment variables.
pub trait EnvironmentPort {
    /// Value of `name`, or `None` when unset or not valid Unicode.
    fn lookup(&self, name: &str) -> Option<String>;
}
