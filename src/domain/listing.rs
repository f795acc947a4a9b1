use std::fmt;

/// A display-ready view over one of the ledger's collections.
///
/// The entries are produced lazily and the listing can be walked any number
/// of times, since each walk clones the underlying iterator. Rendering an
/// empty listing yields its notice instead of a blank block.
#[derive(Debug, Clone)]
pub struct Listing<I> {
    heading: &'static str,
    empty_notice: &'static str,
    entries: I,
}

impl<I> Listing<I>
where
    I: Iterator + Clone,
{
    pub fn new(heading: &'static str, empty_notice: &'static str, entries: I) -> Self {
        Self {
            heading,
            empty_notice,
            entries,
        }
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub fn empty_notice(&self) -> &'static str {
        self.empty_notice
    }

    pub fn is_empty(&self) -> bool {
        self.entries.clone().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.clone().count()
    }

    /// Start a fresh pass over the entries.
    pub fn iter(&self) -> I {
        self.entries.clone()
    }
}

impl<I: Iterator> IntoIterator for Listing<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.entries
    }
}

impl<I> fmt::Display for Listing<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.entries.clone().peekable();
        if entries.peek().is_none() {
            return f.write_str(self.empty_notice);
        }

        f.write_str(self.heading)?;
        for entry in entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}
