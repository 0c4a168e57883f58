//! Ordered colour scales, cyclically assigned to measures by rank.

/// A non-empty, ordered list of colour strings. Selection wraps modulo the
/// length, so a scale shorter than its group simply repeats.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Comma-separated list, e.g. `--positive "#0066cc,#519de9"`.
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    /// Colour for the `rank`-th most extreme measure of a group.
    ///
    /// Callers must not hand an empty palette to the classifier; the config
    /// builder enforces that, so indexing here cannot fail.
    #[must_use]
    pub fn pick(&self, rank: usize) -> &str {
        &self.colors[rank % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Default scale for non-negative measures (blue family).
    #[must_use]
    pub fn segmented_blue() -> Self {
        Self::new(["#0066cc", "#8bc1f7", "#519de9", "#004b95", "#002f5d"])
    }

    /// Default scale for negative measures (red family).
    #[must_use]
    pub fn negative_red() -> Self {
        Self::new(["#c9190b", "#a30000", "#7d1007", "#470000"])
    }
}
