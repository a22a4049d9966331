/// A named configuration option.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used when listing a configuration.
    pub name: &'static str,

    pub value: T,
}

impl<T: std::fmt::Display> std::fmt::Display for ConfigOption<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
