/// The result of a lookup.
///
/// Not finding a resource is an expected outcome, and approximate matches are a list the caller
/// decides how to present, so neither is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Exact match by ID or name.
    Found(T),
    /// No exact match. Approximate matches by name, best first.
    Candidates(Vec<T>),
    /// Nothing matched.
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The exact match, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    /// The exact match, if any.
    pub fn as_found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    /// The approximate matches, or an empty slice.
    pub fn candidates(&self) -> &[T] {
        match self {
            Self::Candidates(values) => values,
            _ => &[],
        }
    }

    /// Every resource in the result, exact match first.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Found(value) => vec![value],
            Self::Candidates(values) => values,
            Self::NotFound => Vec::new(),
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Lookup<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Candidates(values) => Lookup::Candidates(values.into_iter().map(f).collect()),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Maps and filters every resource in the result.
    ///
    /// A result left with nothing in it becomes [`Lookup::NotFound`].
    pub fn filter_map<U, F>(self, mut f: F) -> Lookup<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        match self {
            Self::Found(value) => match f(value) {
                Some(value) => Lookup::Found(value),
                None => Lookup::NotFound,
            },
            Self::Candidates(values) => {
                let values = values.into_iter().filter_map(f).collect::<Vec<_>>();
                if values.is_empty() {
                    Lookup::NotFound
                } else {
                    Lookup::Candidates(values)
                }
            }
            Self::NotFound => Lookup::NotFound,
        }
    }
}
