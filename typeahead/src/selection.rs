//! Host-owned committed value.

/// The committed selection, as the host last set it.
///
/// The widget never changes this itself. Activating a row only reports the
/// activated item to `on_change`; in multi-select mode the host decides how
/// picks accumulate into [`Selection::Many`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection<T> {
    /// Nothing selected.
    #[default]
    None,
    /// A single selected item.
    Single(T),
    /// A collection of selected items.
    Many(Vec<T>),
}

impl<T> Selection<T> {
    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::None => true,
            Selection::Single(_) => false,
            Selection::Many(items) => items.is_empty(),
        }
    }

    /// The selected item, if this is a single selection.
    pub fn as_single(&self) -> Option<&T> {
        match self {
            Selection::Single(item) => Some(item),
            _ => None,
        }
    }

    /// Iterates the selected items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Selection::None => [].iter(),
            Selection::Single(item) => std::slice::from_ref(item).iter(),
            Selection::Many(items) => items.iter(),
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Returns true if `item` is selected.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|selected| selected == item)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map(Selection::Single).unwrap_or_default()
    }
}

impl<T> From<Vec<T>> for Selection<T> {
    fn from(value: Vec<T>) -> Self {
        Selection::Many(value)
    }
}
